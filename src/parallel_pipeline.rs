// THEORY:
// The `parallel_pipeline` module is a throughput-oriented variant of the
// simulator for large frames: the raster is split into horizontal row bands and
// the per-pixel matrix transform runs on a pool of worker tasks. Because the
// transform is purely per-pixel, banding cannot change the result — the output
// is byte-identical to the sequential simulator, which the tests assert.

use crate::core_modules::frame::Frame;
use crate::core_modules::simulator::{transform_rgb, Deficiency, SimulationMatrix};
use tokio::sync::{mpsc, oneshot};

/// One row band handed to a worker, with a reply channel for the transformed
/// bytes.
struct BandTask {
    band: Vec<u8>,
    channels: usize,
    matrix: &'static SimulationMatrix,
    reply: oneshot::Sender<Vec<u8>>,
}

/// A worker pool that simulates color-vision deficiencies over row bands.
pub struct ParallelSimulator {
    task_sender: mpsc::UnboundedSender<BandTask>,
    workers: Vec<tokio::task::JoinHandle<()>>,
    worker_count: usize,
}

impl ParallelSimulator {
    /// Pool sized to the machine's logical CPU count.
    pub fn new() -> Self {
        Self::with_workers(num_cpus::get().max(1))
    }

    pub fn with_workers(worker_count: usize) -> Self {
        let worker_count = worker_count.max(1);
        let (task_sender, mut task_receiver) = mpsc::unbounded_channel::<BandTask>();

        // Create a single dispatcher that distributes band tasks to workers.
        let (worker_senders, worker_receivers): (Vec<_>, Vec<_>) = (0..worker_count)
            .map(|_| mpsc::unbounded_channel::<BandTask>())
            .unzip();

        // Spawn dispatcher.
        tokio::spawn(async move {
            let mut worker_index = 0;
            while let Some(task) = task_receiver.recv().await {
                let _ = worker_senders[worker_index].send(task);
                worker_index = (worker_index + 1) % worker_senders.len();
            }
        });

        // Spawn workers.
        let mut workers = Vec::with_capacity(worker_count);
        for mut worker_receiver in worker_receivers {
            workers.push(tokio::spawn(async move {
                while let Some(task) = worker_receiver.recv().await {
                    let BandTask {
                        mut band,
                        channels,
                        matrix,
                        reply,
                    } = task;
                    transform_rgb(&mut band, channels, matrix);
                    let _ = reply.send(band);
                }
            }));
        }

        Self {
            task_sender,
            workers,
            worker_count,
        }
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Simulates the deficiency over the frame using the worker pool. Produces
    /// output byte-identical to [`crate::core_modules::simulator::simulate`].
    pub async fn simulate(
        &self,
        frame: &Frame,
        deficiency: Deficiency,
    ) -> Result<Frame, &'static str> {
        let width = frame.width() as usize;
        let height = frame.height() as usize;
        let channels = frame.channels() as usize;
        if width == 0 || height == 0 {
            return Ok(frame.clone());
        }

        let row_bytes = width * channels;
        let rows_per_band = height.div_ceil(self.worker_count);

        let mut receivers = Vec::with_capacity(self.worker_count);
        for band in frame.data().chunks(rows_per_band * row_bytes) {
            let (reply, receiver) = oneshot::channel();
            let task = BandTask {
                band: band.to_vec(),
                channels,
                matrix: deficiency.matrix(),
                reply,
            };
            self.task_sender
                .send(task)
                .map_err(|_| "Failed to send band to worker pool")?;
            receivers.push(receiver);
        }

        let mut data = Vec::with_capacity(frame.data().len());
        for receiver in receivers {
            let band = receiver
                .await
                .map_err(|_| "Failed to receive band from worker")?;
            data.extend_from_slice(&band);
        }

        Frame::from_raw(frame.width(), frame.height(), frame.channels(), data)
            .ok_or("Reassembled bands do not match the frame layout")
    }

    /// Drains the pool and waits for all workers to exit.
    pub async fn shutdown(self) {
        drop(self.task_sender);
        for worker in self.workers {
            let _ = worker.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::frame::{Pixel, RGBA_CHANNELS};
    use crate::core_modules::simulator::simulate;

    fn gradient_frame() -> Frame {
        let mut frame = Frame::new(64, 48, RGBA_CHANNELS).unwrap();
        for y in 0..48 {
            for x in 0..64 {
                frame.set_pixel(
                    x,
                    y,
                    Pixel::new((x * 4) as u8, (y * 5) as u8, ((x + y) * 2) as u8, 255),
                );
            }
        }
        frame
    }

    #[tokio::test]
    async fn matches_sequential_simulator() {
        let frame = gradient_frame();
        let pool = ParallelSimulator::with_workers(4);
        for deficiency in [
            Deficiency::Protanopia,
            Deficiency::Deuteranopia,
            Deficiency::Tritanopia,
        ] {
            let parallel = pool.simulate(&frame, deficiency).await.unwrap();
            let sequential = simulate(&frame, deficiency);
            assert_eq!(parallel, sequential);
        }
        pool.shutdown().await;
    }

    #[tokio::test]
    async fn single_worker_pool_still_works() {
        let frame = gradient_frame();
        let pool = ParallelSimulator::with_workers(1);
        let parallel = pool.simulate(&frame, Deficiency::Protanopia).await.unwrap();
        assert_eq!(parallel, simulate(&frame, Deficiency::Protanopia));
        pool.shutdown().await;
    }
}
