//! The shipped campaign: a forest, a mountain, and a beach, with three
//! animals to befriend by gifting the right item.

use crate::graph::{Action, PuzzleRule, World, WorldBuilder};

/// Builds the full campaign world. The table below is fixed data, so the
/// closed-graph check can only fail if the table itself is edited badly.
pub fn campaign_world() -> World {
    WorldBuilder::new("bosque")
        .character("Alba")
        .character("Diego")
        .starting_item("botiquin", 1)
        .fallback_message("¡Has llegado a un nuevo lugar!")
        .message(
            "bosque",
            "¡Bienvenido al bosque! Un lugar lleno de misterios te espera.",
        )
        .message(
            "bosque2",
            "Has encontrado un claro en el bosque. ¡Explora con cuidado!",
        )
        .message(
            "bosqueArbolMagico",
            "Un árbol mágico se alza ante ti. ¿Qué secretos guarda?",
        )
        .message(
            "montaña",
            "¡Las montañas te saludan! El aire es fresco y la vista increíble.",
        )
        .message(
            "zorroHerido",
            "Un zorro herido necesita tu ayuda. ¡Selecciona el botiquín y haz clic en él!",
        )
        .message("zorroCurado", "¡El zorro está curado y te agradece tu ayuda!")
        .location(
            "bosque",
            "Fondos/Bosque1.jpg",
            "bosque",
            vec![Action::move_to(
                "bosqueArbolMagico",
                "Pasear por el bosque",
                "Fondos/BosqueArbolMagico.jpg",
            )],
        )
        .location(
            "bosque2",
            "Fondos/Bosque2.jpg",
            "bosque",
            vec![
                Action::move_to(
                    "bosqueArbolMagico",
                    "Volver al arbol",
                    "Fondos/BosqueArbolMagico.jpg",
                ),
                Action::move_to("bosqueConejo", "Acercarse al conejo", "Fondos/BosqueConejo.jpg"),
                Action::acquire("zanahoria", "Coger la zanahoria", "Objetos/zanahoria.jpg"),
            ],
        )
        .location(
            "bosqueArbolMagico",
            "Fondos/BosqueArbolMagico.jpg",
            "bosque",
            vec![
                Action::move_to("montaña", "Ir a la montaña", "Fondos/Montaña.jpg"),
                Action::move_to("playa", "Ir a la playa", "Fondos/Playa.jpg"),
                Action::move_to("bosque2", "Pasear por el bosque", "Fondos/Bosque2.jpg"),
            ],
        )
        .location(
            "bosqueConejo",
            "Fondos/BosqueConejo.jpg",
            "bosque",
            vec![Action::move_to(
                "bosqueArbolMagico",
                "Volver al arbol",
                "Fondos/BosqueArbolMagico.jpg",
            )],
        )
        .location(
            "bosqueConejoContento",
            "Fondos/BosqueConejoContento.jpg",
            "bosque",
            vec![Action::move_to(
                "bosqueArbolMagico",
                "Volver al arbol",
                "Fondos/BosqueArbolMagico.jpg",
            )],
        )
        .location(
            "montaña",
            "Fondos/Montaña.jpg",
            "montaña",
            vec![
                Action::move_to(
                    "bosqueArbolMagico",
                    "Volver al arbol",
                    "Fondos/BosqueArbolMagico.jpg",
                ),
                Action::move_to("zorroHerido", "Acercarse al zorro", "Fondos/ZorroHerido.jpg"),
            ],
        )
        .location(
            "zorroHerido",
            "Fondos/ZorroHerido.jpg",
            "montaña",
            vec![Action::move_to("montaña", "Ir a la montaña", "Fondos/Montaña.jpg")],
        )
        .location(
            "zorroCurado",
            "Fondos/ZorroCurado.jpg",
            "montaña",
            vec![Action::move_to("montaña", "Ir a la montaña", "Fondos/Montaña.jpg")],
        )
        .location(
            "playa",
            "Fondos/Playa.jpg",
            "playa",
            vec![
                Action::move_to(
                    "bosqueArbolMagico",
                    "Volver al arbol",
                    "Fondos/BosqueArbolMagico.jpg",
                ),
                Action::move_to("playa2", "Pasear por la playa", "Fondos/Playa2.jpg"),
            ],
        )
        .location(
            "playa2",
            "Fondos/Playa2.jpg",
            "playa",
            vec![
                Action::move_to("playa", "Pasear por la playa", "Fondos/Playa.jpg"),
                Action::move_to("playaFocas", "Ir a la casa de las focas", "Fondos/PlayaFocas.jpg"),
                Action::acquire("pechina", "Coger la pechina", "Objetos/pechina.jpg"),
            ],
        )
        .location(
            "playaFocas",
            "Fondos/PlayaFocas.jpg",
            "playa",
            vec![
                Action::move_to("playa", "Pasear por la playa", "Fondos/Playa.jpg"),
                Action::move_to("casaFocas", "Entrar a la casa", "Fondos/CasaFocas.jpg"),
            ],
        )
        .location(
            "casaFocas",
            "Fondos/CasaFocas.jpg",
            "playa",
            vec![Action::move_to("playa", "Pasear por la playa", "Fondos/Playa.jpg")],
        )
        .puzzle(
            "bosqueConejo",
            PuzzleRule::new(
                "zanahoria",
                "Conejo",
                "bosqueConejoContento",
                "El conejo quiere una zanahoria",
                "¡Has regalado una zanahoria al conejo!",
            ),
        )
        .puzzle(
            "zorroHerido",
            PuzzleRule::new(
                "botiquin",
                "ZorroPolar",
                "zorroCurado",
                "El zorro está herido. ¡Necesitas seleccionar el botiquín!",
                "¡Has usado el botiquín para curar al zorro!",
            ),
        )
        .puzzle(
            "casaFocas",
            PuzzleRule::new(
                "pechina",
                "Foca",
                "playaFocas",
                "La foca quiere una pechina",
                "¡Has regalado la pechina a la foca!",
            ),
        )
        .build()
        .expect("campaign world graph is closed over its declared locations")
}
