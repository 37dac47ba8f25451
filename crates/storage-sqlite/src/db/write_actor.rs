//! Single-writer actor for the SQLite database.
//!
//! SQLite allows one writer at a time. All mutations are funneled through a
//! dedicated OS thread holding one connection; callers submit closures and
//! await the result. Jobs run strictly in submission order, which is what
//! makes snapshot emissions follow commit order.

use std::sync::mpsc;
use std::thread;

use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use log::error;
use tokio::sync::oneshot;

use fallapp_core::{Error, Result};

type WriteJob = Box<dyn FnOnce(&mut SqliteConnection) + Send + 'static>;

/// Cloneable handle to the writer thread.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<WriteJob>,
}

impl WriteHandle {
    /// Run `job` on the writer thread and await its result.
    ///
    /// The closure receives the writer's connection; transaction scoping is
    /// the closure's responsibility.
    pub async fn exec<T, F>(&self, job: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
    {
        let (done_tx, done_rx) = oneshot::channel();
        self.tx
            .send(Box::new(move |conn: &mut SqliteConnection| {
                let _ = done_tx.send(job(conn));
            }))
            .map_err(|_| Error::LocalStorage("database writer has shut down".to_string()))?;

        done_rx
            .await
            .map_err(|_| Error::LocalStorage("database writer dropped the job".to_string()))?
    }
}

/// Spawn the writer thread. It drains jobs until every [`WriteHandle`] clone
/// is dropped, then exits.
pub fn spawn_writer(pool: Pool<ConnectionManager<SqliteConnection>>) -> WriteHandle {
    let (tx, rx) = mpsc::channel::<WriteJob>();

    thread::spawn(move || {
        let mut conn = match pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                error!("database writer failed to acquire a connection: {}", e);
                return;
            }
        };
        while let Ok(job) = rx.recv() {
            job(&mut conn);
        }
    });

    WriteHandle { tx }
}
