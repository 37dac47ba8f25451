//! SQLite-backed cache of user profiles. In practice this holds only the
//! signed-in user, cached opportunistically after login or a profile fetch.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::sync::watch;

use fallapp_core::models::Usuario;
use fallapp_core::{CacheStore, Result};

use super::model::UsuarioDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::usuarios;

pub struct UsuarioStore {
    writer: WriteHandle,
    snapshot: Arc<watch::Sender<Vec<Usuario>>>,
}

impl UsuarioStore {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Result<Self> {
        let mut conn = get_connection(&pool)?;
        let seed = Self::load_ordered(&mut conn)?;
        let (tx, _rx) = watch::channel(seed);
        Ok(UsuarioStore {
            writer,
            snapshot: Arc::new(tx),
        })
    }

    fn load_ordered(conn: &mut SqliteConnection) -> Result<Vec<Usuario>> {
        let rows = usuarios::table
            .order(usuarios::id_usuario.asc())
            .load::<UsuarioDB>(conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Usuario::from).collect())
    }
}

#[async_trait]
impl CacheStore<Usuario> for UsuarioStore {
    async fn replace_all(&self, rows: Vec<Usuario>) -> Result<()> {
        let snapshot = Arc::clone(&self.snapshot);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                let mut seen = HashSet::new();
                let deduped: Vec<UsuarioDB> = rows
                    .into_iter()
                    .rev()
                    .filter(|row| seen.insert(row.id_usuario))
                    .map(UsuarioDB::from)
                    .collect();

                conn.immediate_transaction::<_, StorageError, _>(|tx| {
                    diesel::delete(usuarios::table).execute(tx)?;
                    diesel::insert_into(usuarios::table)
                        .values(&deduped)
                        .execute(tx)?;
                    Ok(())
                })
                .map_err(fallapp_core::Error::from)?;

                snapshot.send_replace(Self::load_ordered(conn)?);
                Ok(())
            })
            .await
    }

    fn observe_all(&self) -> watch::Receiver<Vec<Usuario>> {
        self.snapshot.subscribe()
    }

    async fn clear(&self) -> Result<()> {
        let snapshot = Arc::clone(&self.snapshot);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                conn.immediate_transaction::<_, StorageError, _>(|tx| {
                    diesel::delete(usuarios::table).execute(tx)?;
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
    use fallapp_core::models::Rol;
    use tempfile::tempdir;

    use crate::db::{create_pool, init, run_migrations, spawn_writer};

    fn usuario(id: i64, email: &str) -> Usuario {
        Usuario {
            id_usuario: id,
            email: email.to_string(),
            nombre_completo: "Ana Pérez".to_string(),
            rol: Rol::Fallero,
            verificado: true,
            id_falla: Some(7),
            nombre_falla: Some("Na Jordana".to_string()),
        }
    }

    fn setup_store() -> (UsuarioStore, tempfile::TempDir) {
        let dir = tempdir().expect("tempdir");
        let db_path = init(&dir.path().to_string_lossy()).expect("init db");
        run_migrations(&db_path).expect("migrate db");
        let pool = create_pool(&db_path).expect("create pool");
        let writer = spawn_writer(pool.as_ref().clone());
        let store = UsuarioStore::new(pool, writer).expect("open store");
        (store, dir)
    }

    #[tokio::test]
    async fn profile_write_through_replaces_previous_user() {
        let (store, _dir) = setup_store();
        store
            .replace_all(vec![usuario(9, "old@example.com")])
            .await
            .expect("first");
        store
            .replace_all(vec![usuario(9, "new@example.com")])
            .await
            .expect("second");

        let snapshot = store.observe_all().borrow().clone();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].email, "new@example.com");
    }

    #[tokio::test]
    async fn clear_on_sign_out_leaves_no_profile_behind() {
        let (store, _dir) = setup_store();
        store
            .replace_all(vec![usuario(9, "a@b.es")])
            .await
            .expect("replace");
        store.clear().await.expect("clear");
        assert!(store.observe_all().borrow().is_empty());
    }
}
