use bevy::prelude::*;
use constants::bodies::{BodyKind, CelestialBody};

use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::camera::FocusSet;
use crate::engine::camera::focus::FocusChanged;

/// On-screen text panel for one body (native builds).
#[derive(Component, Debug)]
pub struct DescriptionPanel {
    pub body: CelestialBody,
}

pub struct DescriptionPanelPlugin;

impl Plugin for DescriptionPanelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, update_description_panels.after(FocusSet));
    }
}

/// Panel lines for the body's template.
pub fn description_lines(body: CelestialBody) -> Vec<String> {
    let facts = body.info().facts;
    match body.info().kind {
        BodyKind::Planet => vec![
            format!("Diameter: {}", facts.diameter),
            format!("Mass: {}", facts.mass),
            format!("Moons: {}", facts.moons),
            format!("Orbit Distance: {}", facts.orbit_distance),
            format!("Orbit Period: {}", facts.orbit_period),
            format!("Temperature: {}", facts.temperature),
        ],
        BodyKind::Sun => vec![
            "Age: 4.6 Billion Years".to_string(),
            format!("Diameter: {}", facts.diameter),
            format!("Mass: {}", facts.mass),
            format!("Temperature: {}", facts.temperature),
        ],
        BodyKind::Moon => vec![
            format!("Diameter: {}", facts.diameter),
            format!("Mass: {}", facts.mass),
            "Orbits: The Earth".to_string(),
            format!("Orbit Distance: {}", facts.orbit_distance),
            format!("Orbit Period: {}", facts.orbit_period),
            format!("Temperature: {}", facts.temperature),
        ],
    }
}

pub fn description_text(body: CelestialBody) -> String {
    description_lines(body).join("\n")
}

/// Markup written into the page element with the body's panel id.
pub fn description_html(body: CelestialBody) -> String {
    description_lines(body).join("<br> ")
}

/// Column of hidden panels in the top-left corner, one per body.
pub fn spawn_description_panels(commands: &mut Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            flex_direction: FlexDirection::Column,
            ..default()
        })
        .with_children(|parent| {
            for body in CelestialBody::ALL {
                parent.spawn((
                    Text::new(""),
                    TextFont {
                        font_size: 16.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    Node {
                        display: Display::None,
                        ..default()
                    },
                    Name::new(body.info().panel_id),
                    DescriptionPanel { body },
                ));
            }
        });
}

/// Refresh the focused body's panel. Native builds show only that panel,
/// browser builds write into the page element with the body's panel id.
pub fn update_description_panels(
    mut focus_events: EventReader<FocusChanged>,
    config: Option<Res<SceneConfig>>,
    mut panels: Query<(&DescriptionPanel, &mut Text, &mut Node)>,
) {
    let Some(body) = focus_events.read().last().map(|event| event.body) else {
        return;
    };
    if !config.is_some_and(|config| config.description_panels) {
        return;
    }

    for (panel, mut text, mut node) in &mut panels {
        if panel.body == body {
            text.0 = description_text(body);
            node.display = Display::Flex;
        } else {
            node.display = Display::None;
        }
    }

    #[cfg(target_arch = "wasm32")]
    {
        write_panel_element(body);
    }
}

#[cfg(target_arch = "wasm32")]
fn write_panel_element(body: CelestialBody) {
    let panel_id = body.info().panel_id;
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(panel_id));

    match element {
        Some(element) => element.set_inner_html(&description_html(body)),
        None => warn!("Description panel element '#{panel_id}' not found"),
    }
}
