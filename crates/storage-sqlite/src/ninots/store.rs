//! SQLite-backed cache of ninots. Snapshots put awarded pieces first, then
//! order by vote count descending.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::sync::watch;

use fallapp_core::models::Ninot;
use fallapp_core::{CacheStore, Result};

use super::model::NinotDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::ninots;

const INSERT_CHUNK: usize = 500;

pub struct NinotStore {
    writer: WriteHandle,
    snapshot: Arc<watch::Sender<Vec<Ninot>>>,
}

impl NinotStore {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Result<Self> {
        let mut conn = get_connection(&pool)?;
        let seed = Self::load_ordered(&mut conn)?;
        let (tx, _rx) = watch::channel(seed);
        Ok(NinotStore {
            writer,
            snapshot: Arc::new(tx),
        })
    }

    fn load_ordered(conn: &mut SqliteConnection) -> Result<Vec<Ninot>> {
        let rows = ninots::table
            .order((
                ninots::premiado.desc(),
                ninots::total_votos.desc(),
                ninots::id_ninot.asc(),
            ))
            .load::<NinotDB>(conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Ninot::from).collect())
    }
}

#[async_trait]
impl CacheStore<Ninot> for NinotStore {
    async fn replace_all(&self, rows: Vec<Ninot>) -> Result<()> {
        let snapshot = Arc::clone(&self.snapshot);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                let mut seen = HashSet::new();
                let deduped: Vec<NinotDB> = rows
                    .into_iter()
                    .rev()
                    .filter(|row| seen.insert(row.id_ninot))
                    .map(NinotDB::from)
                    .collect();

                conn.immediate_transaction::<_, StorageError, _>(|tx| {
                    diesel::delete(ninots::table).execute(tx)?;
                    for chunk in deduped.chunks(INSERT_CHUNK) {
                        diesel::insert_into(ninots::table)
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

    fn observe_all(&self) -> watch::Receiver<Vec<Ninot>> {
        self.snapshot.subscribe()
    }

    async fn clear(&self) -> Result<()> {
        let snapshot = Arc::clone(&self.snapshot);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                conn.immediate_transaction::<_, StorageError, _>(|tx| {
                    diesel::delete(ninots::table).execute(tx)?;
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
    use tempfile::tempdir;

    use crate::db::{create_pool, init, run_migrations, spawn_writer};

    fn ninot(id: i64, premiado: bool, votos: i32) -> Ninot {
        Ninot {
            id_ninot: id,
            id_falla: 7,
            nombre_falla: "Na Jordana".to_string(),
            nombre_ninot: format!("Ninot {}", id),
            descripcion: None,
            altura_metros: None,
            ancho_metros: None,
            premiado,
            total_votos: votos,
        }
    }

    fn setup_store() -> (NinotStore, tempfile::TempDir) {
        let dir = tempdir().expect("tempdir");
        let db_path = init(&dir.path().to_string_lossy()).expect("init db");
        run_migrations(&db_path).expect("migrate db");
        let pool = create_pool(&db_path).expect("create pool");
        let writer = spawn_writer(pool.as_ref().clone());
        let store = NinotStore::new(pool, writer).expect("open store");
        (store, dir)
    }

    #[tokio::test]
    async fn awarded_ninots_sort_before_higher_vote_counts() {
        let (store, _dir) = setup_store();
        store
            .replace_all(vec![
                ninot(1, false, 900),
                ninot(2, true, 10),
                ninot(3, false, 50),
                ninot(4, true, 300),
            ])
            .await
            .expect("replace");

        let ids: Vec<i64> = store
            .observe_all()
            .borrow()
            .iter()
            .map(|n| n.id_ninot)
            .collect();
        assert_eq!(ids, vec![4, 2, 1, 3]);
    }

    #[tokio::test]
    async fn duplicate_ids_collapse_last_write_wins() {
        let (store, _dir) = setup_store();
        store
            .replace_all(vec![ninot(1, false, 1), ninot(1, true, 5)])
            .await
            .expect("replace");

        let snapshot = store.observe_all().borrow().clone();
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot[0].premiado);
        assert_eq!(snapshot[0].total_votos, 5);
    }
}
