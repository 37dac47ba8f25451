use diesel::prelude::*;

use fallapp_core::models::{Rol, Usuario};

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = crate::schema::usuarios)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UsuarioDB {
    pub id_usuario: i64,
    pub email: String,
    pub nombre_completo: String,
    pub rol: String,
    pub verificado: bool,
    pub id_falla: Option<i64>,
    pub nombre_falla: Option<String>,
}

impl From<Usuario> for UsuarioDB {
    fn from(usuario: Usuario) -> Self {
        UsuarioDB {
            id_usuario: usuario.id_usuario,
            email: usuario.email,
            nombre_completo: usuario.nombre_completo,
            rol: usuario.rol.as_str().to_string(),
            verificado: usuario.verificado,
            id_falla: usuario.id_falla,
            nombre_falla: usuario.nombre_falla,
        }
    }
}

impl From<UsuarioDB> for Usuario {
    fn from(row: UsuarioDB) -> Self {
        Usuario {
            id_usuario: row.id_usuario,
            email: row.email,
            nombre_completo: row.nombre_completo,
            rol: Rol::parse(&row.rol),
            verificado: row.verificado,
            id_falla: row.id_falla,
            nombre_falla: row.nombre_falla,
        }
    }
}
