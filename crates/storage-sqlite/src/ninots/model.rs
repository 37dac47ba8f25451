use diesel::prelude::*;

use fallapp_core::models::Ninot;

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = crate::schema::ninots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NinotDB {
    pub id_ninot: i64,
    pub id_falla: i64,
    pub nombre_falla: String,
    pub nombre_ninot: String,
    pub descripcion: Option<String>,
    pub altura_metros: Option<f64>,
    pub ancho_metros: Option<f64>,
    pub premiado: bool,
    pub total_votos: i32,
}

impl From<Ninot> for NinotDB {
    fn from(ninot: Ninot) -> Self {
        NinotDB {
            id_ninot: ninot.id_ninot,
            id_falla: ninot.id_falla,
            nombre_falla: ninot.nombre_falla,
            nombre_ninot: ninot.nombre_ninot,
            descripcion: ninot.descripcion,
            altura_metros: ninot.altura_metros,
            ancho_metros: ninot.ancho_metros,
            premiado: ninot.premiado,
            total_votos: ninot.total_votos,
        }
    }
}

impl From<NinotDB> for Ninot {
    fn from(row: NinotDB) -> Self {
        Ninot {
            id_ninot: row.id_ninot,
            id_falla: row.id_falla,
            nombre_falla: row.nombre_falla,
            nombre_ninot: row.nombre_ninot,
            descripcion: row.descripcion,
            altura_metros: row.altura_metros,
            ancho_metros: row.ancho_metros,
            premiado: row.premiado,
            total_votos: row.total_votos,
        }
    }
}
