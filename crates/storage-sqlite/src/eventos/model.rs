use chrono::NaiveDateTime;
use diesel::prelude::*;

use fallapp_core::models::Evento;

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = crate::schema::eventos)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EventoDB {
    pub id_evento: i64,
    pub id_falla: i64,
    pub nombre_falla: String,
    pub tipo: String,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub fecha_evento: NaiveDateTime,
    pub ubicacion: Option<String>,
}

impl From<Evento> for EventoDB {
    fn from(evento: Evento) -> Self {
        EventoDB {
            id_evento: evento.id_evento,
            id_falla: evento.id_falla,
            nombre_falla: evento.nombre_falla,
            tipo: evento.tipo,
            nombre: evento.nombre,
            descripcion: evento.descripcion,
            fecha_evento: evento.fecha_evento,
            ubicacion: evento.ubicacion,
        }
    }
}

impl From<EventoDB> for Evento {
    fn from(row: EventoDB) -> Self {
        Evento {
            id_evento: row.id_evento,
            id_falla: row.id_falla,
            nombre_falla: row.nombre_falla,
            tipo: row.tipo,
            nombre: row.nombre,
            descripcion: row.descripcion,
            fecha_evento: row.fecha_evento,
            ubicacion: row.ubicacion,
        }
    }
}
