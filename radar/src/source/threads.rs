use crate::constants::{SWEEP_CHANNEL_CAPACITY, TERMINATOR_CHANNEL_CAPACITY};
use crate::error::{RadarError, Result};
use crate::source::binner::SampleBinner;
use crate::source::{ScanSource, SweepProducer};
use crossbeam_channel::{bounded, select, Receiver, RecvTimeoutError, Sender};
use radar_data::{Sample, Scan};
use std::thread::JoinHandle;
use std::time::Duration;

/// Handle of a producer thread. The thread is stopped and joined on drop.
pub(crate) struct ProducerThread {
    pub(crate) terminator_tx: Sender<bool>,
    pub(crate) thread: Option<JoinHandle<()>>,
}

pub(crate) fn produce_sweeps<P: SweepProducer>(
    mut producer: P,
    sweep_tx: Sender<Vec<Sample>>,
    terminator_rx: Receiver<bool>,
    interval: Duration,
) {
    loop {
        if do_terminate(&terminator_rx) {
            return;
        }

        let sweep = match producer.next_sweep() {
            Ok(sweep) => sweep,
            Err(e) => {
                log::error!("Sweep producer stopped: {e}");
                return;
            }
        };

        // a full channel must not keep the thread from seeing the terminator
        select! {
            send(sweep_tx, sweep) -> res => {
                if res.is_err() {
                    return;
                }
            }
            recv(terminator_rx) -> _ => return,
        }

        match terminator_rx.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => {}
            _ => return,
        }
    }
}

pub(crate) fn do_terminate(terminator_rx: &Receiver<bool>) -> bool {
    terminator_rx.try_recv().unwrap_or(false)
}

/// Function to join the producer thread.
/// This function is automatically called when `producer_thread` is dropped.
pub(crate) fn join(producer_thread: &mut ProducerThread) {
    // the thread may already have exited and dropped its receiver
    let _ = producer_thread.terminator_tx.send(true);

    if let Some(thread) = producer_thread.thread.take() {
        if thread.join().is_err() {
            log::error!("Sweep producer thread panicked");
        }
    }
}

impl Drop for ProducerThread {
    fn drop(&mut self) {
        join(self);
    }
}

/// Scan source fed by a [`SweepProducer`] running on a worker thread.
pub struct ThreadedScanSource {
    sweep_rx: Receiver<Vec<Sample>>,
    binner: SampleBinner,
    _producer_thread: ProducerThread,
}

impl ThreadedScanSource {
    /// Starts `producer` on a new thread, asking it for a sweep every `interval`.
    pub fn spawn<P: SweepProducer>(producer: P, interval: Duration) -> Result<ThreadedScanSource> {
        let (terminator_tx, terminator_rx) = bounded(TERMINATOR_CHANNEL_CAPACITY);
        let (sweep_tx, sweep_rx) = bounded::<Vec<Sample>>(SWEEP_CHANNEL_CAPACITY);

        let thread = std::thread::Builder::new()
            .name("sweep-producer".into())
            .spawn(move || produce_sweeps(producer, sweep_tx, terminator_rx, interval))?;

        Ok(ThreadedScanSource {
            sweep_rx,
            binner: SampleBinner::new(),
            _producer_thread: ProducerThread {
                terminator_tx,
                thread: Some(thread),
            },
        })
    }
}

impl ScanSource for ThreadedScanSource {
    fn acquire_scan(&mut self, timeout: Duration) -> Result<Scan> {
        let sweep = match self.sweep_rx.recv_timeout(timeout) {
            Ok(sweep) => sweep,
            Err(RecvTimeoutError::Timeout) => return Err(RadarError::AcquisitionTimeout(timeout)),
            Err(RecvTimeoutError::Disconnected) => return Err(RadarError::SourceDisconnected),
        };
        self.binner.extend(&sweep);
        // catch up with sweeps that queued while the last frame was drawn
        for sweep in self.sweep_rx.try_iter() {
            self.binner.extend(&sweep);
        }
        Ok(self.binner.snapshot())
    }
}
