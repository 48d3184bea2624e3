//! Periodic sensor polling.

use crate::error::{Result, RoomError};
use crate::sensors::Sensor;
use log::{error, info};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tokio_util::sync::CancellationToken;

/// Sensors polled by a [`Scheduler`], in registration order.
///
/// Shared with the owner so sensors added after the schedule started are
/// picked up on the next tick.
pub type SensorSet = Arc<RwLock<Vec<Arc<dyn Sensor>>>>;

/// Handle to a running polling task.
///
/// Each tick reads every sensor synchronously, one after another. Stopping
/// takes effect between ticks: a read that is already running, along with
/// the observers and strategies it triggers, always completes.
pub struct Scheduler {
    token: CancellationToken,
    task: Mutex<Option<JoinHandle<()>>>,
    ticks: Arc<AtomicU64>,
}

impl Scheduler {
    /// Spawn the polling task. The first tick fires immediately.
    ///
    /// Must be called from within a Tokio runtime. Fails with
    /// [`RoomError::InvalidInterval`] for a zero period.
    pub fn start(sensors: SensorSet, period: Duration) -> Result<Self> {
        if period.is_zero() {
            return Err(RoomError::InvalidInterval);
        }

        let token = CancellationToken::new();
        let ticks = Arc::new(AtomicU64::new(0));

        let task_token = token.clone();
        let task_ticks = Arc::clone(&ticks);
        let task = tokio::spawn(async move {
            let mut interval = interval(period);
            loop {
                tokio::select! {
                    biased;
                    _ = task_token.cancelled() => break,
                    _ = interval.tick() => {
                        let snapshot: Vec<Arc<dyn Sensor>> = sensors.read().clone();
                        for sensor in &snapshot {
                            sensor.read();
                        }
                        task_ticks.fetch_add(1, Ordering::SeqCst);
                    }
                }
            }
            info!(
                "[Scheduler] stopped after {} tick(s)",
                task_ticks.load(Ordering::SeqCst)
            );
        });

        info!("[Scheduler] polling every {} ms", period.as_millis());
        Ok(Self {
            token,
            task: Mutex::new(Some(task)),
            ticks,
        })
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::SeqCst)
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Prevent any further ticks. Returns immediately.
    pub fn stop(&self) {
        self.token.cancel();
    }

    /// Stop and wait for the polling task to finish its current tick.
    pub async fn shutdown(&self) {
        self.stop();
        let task = self.task.lock().take();
        if let Some(task) = task
            && let Err(e) = task.await
        {
            error!("[Scheduler] polling task failed: {}", e);
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::test_support::RecordingObserver;
    use crate::sensors::{
        MeasurementType, ObserverList, SensorObserver, SensorReading, TemperatureSensor,
    };
    use std::sync::atomic::AtomicUsize;

    fn sensor_set(sensors: Vec<Arc<dyn Sensor>>) -> SensorSet {
        Arc::new(RwLock::new(sensors))
    }

    #[tokio::test]
    async fn test_zero_period_is_rejected() {
        let result = Scheduler::start(sensor_set(Vec::new()), Duration::ZERO);
        assert!(matches!(result, Err(RoomError::InvalidInterval)));
    }

    #[tokio::test]
    async fn test_polls_all_sensors_until_stopped() {
        let observer = Arc::new(RecordingObserver::default());
        let observer_dyn: Arc<dyn SensorObserver> = observer.clone();
        let a: Arc<dyn Sensor> = Arc::new(TemperatureSensor::with_seed("T1", 1));
        let b: Arc<dyn Sensor> = Arc::new(TemperatureSensor::with_seed("T2", 2));
        a.add_observer(&observer_dyn);
        b.add_observer(&observer_dyn);

        let scheduler =
            Scheduler::start(sensor_set(vec![a, b]), Duration::from_millis(20)).unwrap();
        tokio::time::sleep(Duration::from_millis(110)).await;
        scheduler.shutdown().await;
        assert!(!scheduler.is_running());

        let ticks = scheduler.ticks();
        assert!(ticks >= 3, "only {ticks} ticks");
        assert_eq!(observer.count() as u64, ticks * 2);

        let seen = observer.seen.lock();
        assert_eq!(seen[0].0, "T1");
        assert_eq!(seen[1].0, "T2");
        drop(seen);

        let after_stop = observer.count();
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(observer.count(), after_stop);
    }

    #[tokio::test]
    async fn test_picks_up_sensors_added_later() {
        let observer = Arc::new(RecordingObserver::default());
        let observer_dyn: Arc<dyn SensorObserver> = observer.clone();
        let sensors = sensor_set(Vec::new());

        let scheduler =
            Scheduler::start(Arc::clone(&sensors), Duration::from_millis(10)).unwrap();
        let late: Arc<dyn Sensor> = Arc::new(TemperatureSensor::with_seed("T9", 9));
        late.add_observer(&observer_dyn);
        sensors.write().push(late);

        tokio::time::sleep(Duration::from_millis(50)).await;
        scheduler.shutdown().await;
        assert!(observer.count() >= 1);
    }

    /// Sensor whose read blocks for a while, to stop the scheduler mid-read.
    struct SlowSensor {
        started: AtomicUsize,
        finished: AtomicUsize,
        observers: ObserverList,
    }

    impl Sensor for SlowSensor {
        fn id(&self) -> &str {
            "SLOW"
        }

        fn kind(&self) -> MeasurementType {
            MeasurementType::Temperature
        }

        fn read(&self) -> SensorReading {
            self.started.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(Duration::from_millis(50));
            let reading = SensorReading::new("SLOW", MeasurementType::Temperature, 25.0);
            self.notify_observers(&reading);
            self.finished.fetch_add(1, Ordering::SeqCst);
            reading
        }

        fn add_observer(&self, observer: &Arc<dyn SensorObserver>) {
            self.observers.add(observer);
        }

        fn remove_observer(&self, observer: &Arc<dyn SensorObserver>) {
            self.observers.remove(observer);
        }

        fn notify_observers(&self, reading: &SensorReading) {
            self.observers.notify(self, reading);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_stop_does_not_interrupt_in_flight_read() {
        let slow = Arc::new(SlowSensor {
            started: AtomicUsize::new(0),
            finished: AtomicUsize::new(0),
            observers: ObserverList::new(),
        });
        let slow_dyn: Arc<dyn Sensor> = slow.clone();

        let scheduler =
            Scheduler::start(sensor_set(vec![slow_dyn]), Duration::from_millis(200)).unwrap();
        tokio::time::sleep(Duration::from_millis(15)).await;
        scheduler.stop();
        scheduler.shutdown().await;

        assert_eq!(slow.started.load(Ordering::SeqCst), 1);
        assert_eq!(slow.finished.load(Ordering::SeqCst), 1);
    }
}
