//! SQLite-backed cache of upcoming events, ordered chronologically.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::sync::watch;

use fallapp_core::models::Evento;
use fallapp_core::{CacheStore, Result};

use super::model::EventoDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::eventos;

const INSERT_CHUNK: usize = 500;

pub struct EventoStore {
    writer: WriteHandle,
    snapshot: Arc<watch::Sender<Vec<Evento>>>,
}

impl EventoStore {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Result<Self> {
        let mut conn = get_connection(&pool)?;
        let seed = Self::load_ordered(&mut conn)?;
        let (tx, _rx) = watch::channel(seed);
        Ok(EventoStore {
            writer,
            snapshot: Arc::new(tx),
        })
    }

    fn load_ordered(conn: &mut SqliteConnection) -> Result<Vec<Evento>> {
        let rows = eventos::table
            .order((eventos::fecha_evento.asc(), eventos::id_evento.asc()))
            .load::<EventoDB>(conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Evento::from).collect())
    }
}

#[async_trait]
impl CacheStore<Evento> for EventoStore {
    async fn replace_all(&self, rows: Vec<Evento>) -> Result<()> {
        let snapshot = Arc::clone(&self.snapshot);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                let mut seen = HashSet::new();
                let deduped: Vec<EventoDB> = rows
                    .into_iter()
                    .rev()
                    .filter(|row| seen.insert(row.id_evento))
                    .map(EventoDB::from)
                    .collect();

                conn.immediate_transaction::<_, StorageError, _>(|tx| {
                    diesel::delete(eventos::table).execute(tx)?;
                    for chunk in deduped.chunks(INSERT_CHUNK) {
                        diesel::insert_into(eventos::table)
                            .values(chunk)
                            .execute(tx)?;
                    }
                    Ok(())
                })
                .map_err(fallapp_core::Error::from)?;

                snapshot.send_replace(Self::load_ordered(conn)?);
                Ok(())
            })
            .await
    }

    fn observe_all(&self) -> watch::Receiver<Vec<Evento>> {
        self.snapshot.subscribe()
    }

    async fn clear(&self) -> Result<()> {
        let snapshot = Arc::clone(&self.snapshot);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                conn.immediate_transaction::<_, StorageError, _>(|tx| {
                    diesel::delete(eventos::table).execute(tx)?;
                    Ok(())
                })
                .map_err(fallapp_core::Error::from)?;
                snapshot.send_replace(Vec::new());
                Ok(())
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    use crate::db::{create_pool, init, run_migrations, spawn_writer};

    fn evento(id: i64, day: u32) -> Evento {
        Evento {
            id_evento: id,
            id_falla: 7,
            nombre_falla: "Na Jordana".to_string(),
            tipo: "VERBENA".to_string(),
            nombre: format!("Evento {}", id),
            descripcion: None,
            fecha_evento: NaiveDate::from_ymd_opt(2026, 3, day)
                .unwrap()
                .and_hms_opt(22, 0, 0)
                .unwrap(),
            ubicacion: None,
        }
    }

    fn setup_store() -> (EventoStore, tempfile::TempDir) {
        let dir = tempdir().expect("tempdir");
        let db_path = init(&dir.path().to_string_lossy()).expect("init db");
        run_migrations(&db_path).expect("migrate db");
        let pool = create_pool(&db_path).expect("create pool");
        let writer = spawn_writer(pool.as_ref().clone());
        let store = EventoStore::new(pool, writer).expect("open store");
        (store, dir)
    }

    #[tokio::test]
    async fn snapshots_are_chronological() {
        let (store, _dir) = setup_store();
        store
            .replace_all(vec![evento(1, 19), evento(2, 15), evento(3, 17)])
            .await
            .expect("replace");

        let ids: Vec<i64> = store
            .observe_all()
            .borrow()
            .iter()
            .map(|e| e.id_evento)
            .collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[tokio::test]
    async fn sequential_replacements_emit_in_commit_order() {
        let (store, _dir) = setup_store();
        let mut rx = store.observe_all();

        store.replace_all(vec![evento(1, 15)]).await.expect("first");
        store
            .replace_all(vec![evento(2, 16), evento(3, 17)])
            .await
            .expect("second");

        // watch keeps only the latest value; after both commits the
        // receiver must observe the second replacement, never the first.
        rx.changed().await.expect("changed");
        let ids: Vec<i64> = rx.borrow().iter().map(|e| e.id_evento).collect();
        assert_eq!(ids, vec![2, 3]);
    }
}
