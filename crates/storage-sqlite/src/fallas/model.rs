use diesel::prelude::*;

use fallapp_core::models::{Categoria, Falla};

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = crate::schema::fallas)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FallaDB {
    pub id_falla: i64,
    pub nombre: String,
    pub seccion: String,
    pub presidente: Option<String>,
    pub lema: Option<String>,
    pub categoria: String,
    pub url_boceto: Option<String>,
    pub latitud: Option<f64>,
    pub longitud: Option<f64>,
}

impl From<Falla> for FallaDB {
    fn from(falla: Falla) -> Self {
        FallaDB {
            id_falla: falla.id_falla,
            nombre: falla.nombre,
            seccion: falla.seccion,
            presidente: falla.presidente,
            lema: falla.lema,
            categoria: falla.categoria.as_str().to_string(),
            url_boceto: falla.url_boceto,
            latitud: falla.latitud,
            longitud: falla.longitud,
        }
    }
}

impl From<FallaDB> for Falla {
    fn from(row: FallaDB) -> Self {
        Falla {
            id_falla: row.id_falla,
            nombre: row.nombre,
            seccion: row.seccion,
            presidente: row.presidente,
            lema: row.lema,
            categoria: Categoria::parse(&row.categoria),
            url_boceto: row.url_boceto,
            latitud: row.latitud,
            longitud: row.longitud,
        }
    }
}
