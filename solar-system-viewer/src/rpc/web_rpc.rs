use crate::engine::animation::animation_loop::KeyframeAnimations;
use crate::engine::camera::focus::{FocusChanged, FocusRequest, FocusSource, FocusState};
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use constants::bodies::CelestialBody;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC 2.0 error object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Outgoing notifications and responses, flushed to the hosting page once per frame.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the hosting page without expecting a response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }

    pub fn pending_notifications(&self) -> &[RpcNotification] {
        &self.outgoing_notifications
    }
}

/// Engine state a request may read, and the focus requests it produced.
pub struct RpcContext {
    pub fps: f32,
    pub current_focus: Option<CelestialBody>,
    pub focus_requests: Vec<FocusRequest>,
}

pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    notify_focus_changed,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    // Filled by the JS callback, drained once per frame.
    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    let Some(window) = window() else {
        error!("Window object not available, RPC listener not installed");
        return;
    };
    if let Err(e) =
        window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
    {
        error!("Failed to register message listener: {:?}", e);
        return;
    }

    // JS owns the closure from here on.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Raw message received from the hosting page.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Res<DiagnosticsStore>,
    focus_state: Res<FocusState>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut focus_events: EventWriter<FocusRequest>,
) {
    let mut context = RpcContext {
        fps: current_fps(&diagnostics),
        current_focus: focus_state.current,
        focus_requests: Vec::new(),
    };

    for event in events.read() {
        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                debug!("Processing RPC method: {}", request.method);
                if let Some(response) = handle_rpc_request(&request, &mut context) {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => warn!("Discarded malformed RPC message: {}", parse_error),
        }
    }

    focus_events.write_batch(context.focus_requests);
}

/// Dispatch one request. Every request is processed; only requests carrying
/// an id get a response.
pub fn handle_rpc_request(request: &RpcRequest, context: &mut RpcContext) -> Option<RpcResponse> {
    let result = match request.method.as_str() {
        "focus_body" => handle_focus_body(&request.params, context),
        "get_focus" => Ok(serde_json::json!({
            "body": context.current_focus.map(CelestialBody::name)
        })),
        "list_bodies" => Ok(serde_json::json!({
            "bodies": CelestialBody::ALL.map(CelestialBody::name)
        })),
        "get_fps" => Ok(serde_json::json!({ "fps": context.fps })),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            Err(RpcError {
                code: -32601,
                message: "Method not found".to_string(),
                data: Some(serde_json::json!({"method": request.method})),
            })
        }
    };

    let id = request.id.clone()?;
    Some(match result {
        Ok(result_value) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        },
        Err(error) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        },
    })
}

fn handle_focus_body(
    params: &serde_json::Value,
    context: &mut RpcContext,
) -> Result<serde_json::Value, RpcError> {
    #[derive(Deserialize)]
    struct FocusBodyParams {
        body: String,
    }

    let focus_params = serde_json::from_value::<FocusBodyParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'body' parameter"))?;

    let body = CelestialBody::from_name(&focus_params.body)
        .ok_or_else(|| RpcError::invalid_params(&format!("Unknown body: {}", focus_params.body)))?;

    context.focus_requests.push(FocusRequest {
        body,
        source: FocusSource::Rpc,
    });
    info!("Focus request dispatched: {}", body.name());

    Ok(serde_json::json!({
        "success": true,
        "body": body.name()
    }))
}

pub fn current_fps(diagnostics: &DiagnosticsStore) -> f32 {
    diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps_diagnostic| fps_diagnostic.smoothed())
        .unwrap_or(0.0) as f32
}

pub fn notify_focus_changed(
    mut focus_events: EventReader<FocusChanged>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for event in focus_events.read() {
        rpc_interface.send_notification(
            "focus_changed",
            serde_json::json!({
                "body": event.body.name(),
                "source": format!("{:?}", event.source).to_lowercase(),
            }),
        );
    }
}

pub fn notify_scene_loaded(
    animations: Res<KeyframeAnimations>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    rpc_interface.send_notification(
        "scene_loaded",
        serde_json::json!({
            "bodies": CelestialBody::ALL.map(CelestialBody::name),
            "clips": animations.len(),
        }),
    );
}

/// Flush notifications first, then responses.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Post a serialised message to the parent window.
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
    }
}

impl RpcError {
    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }
}
