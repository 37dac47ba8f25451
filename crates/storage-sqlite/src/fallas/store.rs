//! SQLite-backed cache of the falla listing, observed as whole snapshots
//! ordered by name.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::sync::watch;

use fallapp_core::models::Falla;
use fallapp_core::{CacheStore, Result};

use super::model::FallaDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::fallas;

const INSERT_CHUNK: usize = 500;

pub struct FallaStore {
    writer: WriteHandle,
    snapshot: Arc<watch::Sender<Vec<Falla>>>,
}

impl FallaStore {
    /// Open the store, seeding the observable snapshot from whatever
    /// survived on disk.
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Result<Self> {
        let mut conn = get_connection(&pool)?;
        let seed = Self::load_ordered(&mut conn)?;
        let (tx, _rx) = watch::channel(seed);
        Ok(FallaStore {
            writer,
            snapshot: Arc::new(tx),
        })
    }

    fn load_ordered(conn: &mut SqliteConnection) -> Result<Vec<Falla>> {
        let rows = fallas::table
            .order((fallas::nombre.asc(), fallas::id_falla.asc()))
            .load::<FallaDB>(conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Falla::from).collect())
    }
}

#[async_trait]
impl CacheStore<Falla> for FallaStore {
    async fn replace_all(&self, rows: Vec<Falla>) -> Result<()> {
        let snapshot = Arc::clone(&self.snapshot);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                // Last occurrence of a duplicated id wins.
                let mut seen = HashSet::new();
                let deduped: Vec<FallaDB> = rows
                    .into_iter()
                    .rev()
                    .filter(|row| seen.insert(row.id_falla))
                    .map(FallaDB::from)
                    .collect();

                conn.immediate_transaction::<_, StorageError, _>(|tx| {
                    diesel::delete(fallas::table).execute(tx)?;
                    for chunk in deduped.chunks(INSERT_CHUNK) {
                        diesel::insert_into(fallas::table)
                            .values(chunk)
                            .execute(tx)?;
                    }
                    Ok(())
                })
                .map_err(fallapp_core::Error::from)?;

                // Published from the writer job so emissions follow commit order.
                snapshot.send_replace(Self::load_ordered(conn)?);
                Ok(())
            })
            .await
    }

    fn observe_all(&self) -> watch::Receiver<Vec<Falla>> {
        self.snapshot.subscribe()
    }

    async fn clear(&self) -> Result<()> {
        let snapshot = Arc::clone(&self.snapshot);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                conn.immediate_transaction::<_, StorageError, _>(|tx| {
                    diesel::delete(fallas::table).execute(tx)?;
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
    use fallapp_core::models::Categoria;
    use tempfile::tempdir;

    use crate::db::{create_pool, init, run_migrations, spawn_writer};

    fn falla(id: i64, nombre: &str) -> Falla {
        Falla {
            id_falla: id,
            nombre: nombre.to_string(),
            seccion: "Especial".to_string(),
            presidente: None,
            lema: None,
            categoria: Categoria::Especial,
            url_boceto: None,
            latitud: None,
            longitud: None,
        }
    }

    fn setup_store() -> (FallaStore, tempfile::TempDir) {
        let dir = tempdir().expect("tempdir");
        let db_path = init(&dir.path().to_string_lossy()).expect("init db");
        run_migrations(&db_path).expect("migrate db");
        let pool = create_pool(&db_path).expect("create pool");
        let writer = spawn_writer(pool.as_ref().clone());
        let store = FallaStore::new(pool, writer).expect("open store");
        (store, dir)
    }

    #[tokio::test]
    async fn replace_all_orders_by_nombre() {
        let (store, _dir) = setup_store();
        store
            .replace_all(vec![falla(2, "Na Jordana"), falla(1, "Convento Jerusalén")])
            .await
            .expect("replace");

        let rx = store.observe_all();
        let names: Vec<String> = rx.borrow().iter().map(|f| f.nombre.clone()).collect();
        assert_eq!(names, vec!["Convento Jerusalén", "Na Jordana"]);
    }

    #[tokio::test]
    async fn duplicate_ids_collapse_last_write_wins() {
        let (store, _dir) = setup_store();
        store
            .replace_all(vec![falla(1, "Vieja"), falla(1, "Nueva")])
            .await
            .expect("replace");

        let rx = store.observe_all();
        let snapshot = rx.borrow().clone();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].nombre, "Nueva");
    }

    #[tokio::test]
    async fn observer_sees_whole_replacement_never_partial() {
        let (store, _dir) = setup_store();
        store
            .replace_all(vec![falla(1, "A"), falla(2, "B")])
            .await
            .expect("first replace");

        let mut rx = store.observe_all();
        rx.mark_changed();
        rx.changed().await.expect("initial snapshot");
        assert_eq!(rx.borrow().len(), 2);

        store
            .replace_all(vec![falla(3, "C")])
            .await
            .expect("second replace");
        rx.changed().await.expect("replacement snapshot");
        let snapshot = rx.borrow().clone();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id_falla, 3);
    }

    #[tokio::test]
    async fn clear_empties_table_and_snapshot() {
        let (store, _dir) = setup_store();
        store
            .replace_all(vec![falla(1, "A")])
            .await
            .expect("replace");
        store.clear().await.expect("clear");
        assert!(store.observe_all().borrow().is_empty());
    }

    #[tokio::test]
    async fn reopened_store_seeds_from_disk() {
        let dir = tempdir().expect("tempdir");
        let db_path = init(&dir.path().to_string_lossy()).expect("init db");
        run_migrations(&db_path).expect("migrate db");

        {
            let pool = create_pool(&db_path).expect("create pool");
            let writer = spawn_writer(pool.as_ref().clone());
            let store = FallaStore::new(pool, writer).expect("open store");
            store
                .replace_all(vec![falla(1, "Persistida")])
                .await
                .expect("replace");
        }

        let pool = create_pool(&db_path).expect("reopen pool");
        let writer = spawn_writer(pool.as_ref().clone());
        let store = FallaStore::new(pool, writer).expect("reopen store");
        let snapshot = store.observe_all().borrow().clone();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].nombre, "Persistida");
    }
}
