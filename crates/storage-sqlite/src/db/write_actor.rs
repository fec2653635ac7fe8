use super::DbPool;
use crate::errors::StorageError;
use accrue_core::errors::{DatabaseError, Error, Result};
use diesel::SqliteConnection;
use log::error;
use std::any::Any;
use tokio::sync::{mpsc, oneshot};

// A write job runs against the actor's connection and returns a core Result.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;
type Reply = oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>;

/// Queue depth of pending write jobs.
const WRITE_QUEUE_CAPACITY: usize = 64;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(Job<Box<dyn Any + Send + 'static>>, Reply)>,
}

impl WriteHandle {
    /// Runs `job` inside an immediate transaction on the writer's connection.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .map_err(|_| writer_stopped())?;

        let boxed = ret_rx.await.map_err(|_| writer_stopped())??;
        boxed
            .downcast::<T>()
            .map(|v| *v)
            .map_err(|_| Error::Unexpected("writer actor returned an unexpected type".to_string()))
    }
}

fn writer_stopped() -> Error {
    Error::Database(DatabaseError::ConnectionFailed(
        "database writer is not running".to_string(),
    ))
}

/// Spawns a background task that owns one pooled connection and applies
/// write jobs serially. Must be called from within a Tokio runtime.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) =
        mpsc::channel::<(Job<Box<dyn Any + Send + 'static>>, Reply)>(WRITE_QUEUE_CAPACITY);

    tokio::spawn(async move {
        let mut conn = match pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                error!("Writer actor could not acquire a connection: {}", e);
                return;
            }
        };

        while let Some((job, reply_tx)) = rx.recv().await {
            let result: Result<Box<dyn Any + Send + 'static>> = conn
                .immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(|e: StorageError| e.into());

            // The requester may have gone away.
            let _ = reply_tx.send(result);
        }
    });

    WriteHandle { tx }
}
