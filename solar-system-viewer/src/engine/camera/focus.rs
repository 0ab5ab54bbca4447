use bevy::prelude::*;
use constants::bodies::CelestialBody;
use thiserror::Error;

use super::first_person::FirstPersonControls;
use super::orbit_controls::OrbitControls;

/// The single perspective camera of the scene.
#[derive(Component)]
pub struct MainCamera;

/// Where a focus request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusSource {
    Startup,
    Keyboard,
    Rpc,
}

/// Ask for the camera to be moved to `body`.
#[derive(Event, Debug, Clone, Copy)]
pub struct FocusRequest {
    pub body: CelestialBody,
    pub source: FocusSource,
}

/// Sent after the camera has been attached to a new body.
#[derive(Event, Debug, Clone, Copy)]
pub struct FocusChanged {
    pub body: CelestialBody,
    pub source: FocusSource,
}

#[derive(Resource, Default, Debug)]
pub struct FocusState {
    pub current: Option<CelestialBody>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FocusError {
    #[error("no scene node named '{0}'")]
    BodyNotFound(&'static str),
    #[error("no main camera to focus")]
    CameraMissing,
}

pub struct CameraFocusPlugin;

impl Plugin for CameraFocusPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FocusState>()
            .add_event::<FocusRequest>()
            .add_event::<FocusChanged>()
            .add_systems(Update, apply_focus_requests.in_set(super::FocusSet));
    }
}

/// Find the scene node carrying the body's name.
pub fn find_body_node<'a>(
    body: CelestialBody,
    mut nodes: impl Iterator<Item = (Entity, &'a Name)>,
) -> Result<Entity, FocusError> {
    nodes
        .find(|(_, name)| name.as_str() == body.name())
        .map(|(entity, _)| entity)
        .ok_or(FocusError::BodyNotFound(body.name()))
}

pub fn apply_focus_requests(
    mut commands: Commands,
    mut requests: EventReader<FocusRequest>,
    mut changed: EventWriter<FocusChanged>,
    mut focus_state: ResMut<FocusState>,
    nodes: Query<(Entity, &Name), Without<MainCamera>>,
    mut camera_query: Query<(Entity, &mut Transform), With<MainCamera>>,
    mut orbit: Option<ResMut<OrbitControls>>,
    mut first_person: Option<ResMut<FirstPersonControls>>,
) {
    for request in requests.read() {
        let result = focus_camera(
            request.body,
            &mut commands,
            &nodes,
            &mut camera_query,
            orbit.as_deref_mut(),
            first_person.as_deref_mut(),
        );

        match result {
            Ok(()) => {
                info!("Camera focused on {} ({:?})", request.body.name(), request.source);
                focus_state.current = Some(request.body);
                changed.write(FocusChanged {
                    body: request.body,
                    source: request.source,
                });
            }
            Err(error) => warn!("Focus on {} failed: {error}", request.body.name()),
        }
    }
}

/// Attach the camera to the body's node, move it to the body's offset and
/// aim the active controls at the node origin.
fn focus_camera(
    body: CelestialBody,
    commands: &mut Commands,
    nodes: &Query<(Entity, &Name), Without<MainCamera>>,
    camera_query: &mut Query<(Entity, &mut Transform), With<MainCamera>>,
    orbit: Option<&mut OrbitControls>,
    first_person: Option<&mut FirstPersonControls>,
) -> Result<(), FocusError> {
    let node = find_body_node(body, nodes.iter())?;
    let (camera, mut transform) = camera_query
        .single_mut()
        .map_err(|_| FocusError::CameraMissing)?;

    let info = body.info();
    commands.entity(node).add_child(camera);
    transform.translation = info.offset.apply(transform.translation);

    if let Some(orbit) = orbit {
        orbit.target = Vec3::ZERO;
        orbit.auto_rotate = info.auto_rotate;
        transform.translation = orbit.update(transform.translation, 0.0);
        transform.look_at(orbit.target, Vec3::Y);
    } else if let Some(first_person) = first_person {
        first_person.face_towards(transform.translation, Vec3::ZERO);
        transform.rotation = first_person.rotation();
    } else {
        transform.look_at(Vec3::ZERO, Vec3::Y);
    }

    Ok(())
}
