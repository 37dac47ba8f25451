//! Pure DTO → domain mappers.
//!
//! Mappers never fail for a well-formed DTO. Timestamps the backend sends as
//! text are parsed tolerantly; an unparsable date substitutes the current
//! time and logs a warning so the data-quality problem is at least visible.

use chrono::{NaiveDateTime, Utc};
use log::warn;

use fallapp_core::models::{
    Categoria, Evento, Falla, FallaRanking, Ninot, Rol, TipoVoto, Usuario, Voto,
};

use crate::dto::{EventoDto, FallaDto, FallaRankingDto, NinotDto, UsuarioDto, VotoDto};

/// Parse an ISO-8601-ish timestamp, with or without offset or sub-seconds.
/// Falls back to the current time when nothing matches.
pub fn parse_fecha(value: &str) -> NaiveDateTime {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(value) {
        return dt.naive_local();
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return dt;
        }
    }
    warn!("unparsable timestamp '{}', substituting current time", value);
    Utc::now().naive_utc()
}

pub fn map_falla(dto: FallaDto) -> Falla {
    Falla {
        id_falla: dto.id_falla,
        nombre: dto.nombre,
        seccion: dto.seccion,
        presidente: dto.presidente,
        lema: dto.lema,
        categoria: Categoria::parse(dto.categoria.as_deref().unwrap_or("")),
        url_boceto: dto.url_boceto,
        latitud: dto.latitud,
        longitud: dto.longitud,
    }
}

pub fn map_evento(dto: EventoDto) -> Evento {
    Evento {
        id_evento: dto.id_evento,
        id_falla: dto.id_falla,
        nombre_falla: dto.nombre_falla,
        tipo: dto.tipo,
        nombre: dto.nombre,
        descripcion: dto.descripcion,
        fecha_evento: parse_fecha(&dto.fecha_evento),
        ubicacion: dto.ubicacion,
    }
}

pub fn map_ninot(dto: NinotDto) -> Ninot {
    Ninot {
        id_ninot: dto.id_ninot,
        id_falla: dto.id_falla,
        nombre_falla: dto.nombre_falla,
        nombre_ninot: dto.nombre_ninot,
        descripcion: dto.descripcion,
        altura_metros: dto.altura_metros,
        ancho_metros: dto.ancho_metros,
        premiado: dto.premiado,
        total_votos: dto.total_votos,
    }
}

pub fn map_voto(dto: VotoDto) -> Voto {
    Voto {
        id_voto: dto.id_voto,
        id_usuario: dto.id_usuario,
        nombre_usuario: dto.nombre_usuario,
        id_falla: dto.id_falla,
        nombre_falla: dto.nombre_falla,
        tipo_voto: TipoVoto::parse(&dto.tipo_voto),
        fecha_creacion: parse_fecha(&dto.fecha_creacion),
    }
}

pub fn map_usuario(dto: UsuarioDto) -> Usuario {
    Usuario {
        id_usuario: dto.id_usuario,
        email: dto.email,
        nombre_completo: dto.nombre_completo,
        rol: Rol::parse(&dto.rol),
        verificado: dto.verificado,
        id_falla: dto.id_falla,
        nombre_falla: dto.nombre_falla,
    }
}

pub fn map_ranking(dto: FallaRankingDto) -> FallaRanking {
    FallaRanking {
        id_falla: dto.id_falla,
        nombre: dto.nombre,
        seccion: dto.seccion,
        votos: dto.votos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evento_dto(fecha: &str) -> EventoDto {
        EventoDto {
            id_evento: 1,
            id_falla: 7,
            nombre_falla: "Na Jordana".into(),
            tipo: "VERBENA".into(),
            nombre: "Verbena popular".into(),
            descripcion: None,
            fecha_evento: fecha.into(),
            ubicacion: None,
        }
    }

    #[test]
    fn parses_local_and_offset_timestamps() {
        assert_eq!(
            parse_fecha("2026-03-15T22:00:00"),
            NaiveDateTime::parse_from_str("2026-03-15T22:00:00", "%Y-%m-%dT%H:%M:%S").unwrap()
        );
        let with_offset = parse_fecha("2026-03-15T22:00:00+01:00");
        assert_eq!(with_offset.format("%H:%M").to_string(), "22:00");
    }

    #[test]
    fn unparsable_date_substitutes_now_without_failing() {
        let before = Utc::now().naive_utc();
        let evento = map_evento(evento_dto("not-a-date"));
        let after = Utc::now().naive_utc();
        assert!(evento.fecha_evento >= before && evento.fecha_evento <= after);
    }

    #[test]
    fn mapping_is_idempotent() {
        let dto = evento_dto("2026-03-15T22:00:00");
        let a = map_evento(dto.clone());
        let b = map_evento(dto);
        assert_eq!(a, b);
    }

    #[test]
    fn falla_without_categoria_maps_to_sin_categoria() {
        let dto = FallaDto {
            id_falla: 1,
            nombre: "El Pilar".into(),
            seccion: "Especial".into(),
            presidente: None,
            lema: None,
            categoria: None,
            url_boceto: None,
            latitud: None,
            longitud: None,
        };
        assert_eq!(map_falla(dto).categoria, Categoria::SinCategoria);
    }
}
