//! JSON-RPC 2.0 bridge between the viewer and the page hosting it.
//!
//! In the browser the viewer listens for `postMessage` events carrying
//! JSON-RPC requests and answers through the parent window. Native builds
//! compile the same handlers with the transport as a no-op.
//!
//! ## Message Flow
//!
//! ```text
//! Hosting page  <──postMessage──>  Viewer (canvas / iframe)
//!      │                                 │
//!      ├─ Request (with ID) ───────────> │
//!      │                                 ├─ Process request
//!      │ <──────────── Response (with ID)┤
//!      │                                 │
//!      │ <──────── Notification (no ID) ─┤
//! ```
//!
//! A request without an id is still processed, it just gets no response.
//!
//! ## Methods
//!
//! - `focus_body` `{"body": "earth"}`: attach the camera to a body
//!   (case-insensitive name). Replies `{"success": true, "body": "Earth"}`.
//! - `get_focus`: currently focused body, or `null`.
//! - `list_bodies`: every body name in shortcut order.
//! - `get_fps`: smoothed frame rate.
//!
//! ## Notifications
//!
//! - `scene_loaded`: model spawned, with body names and clip count.
//! - `focus_changed`: `{"body": ..., "source": "startup" | "keyboard" | "rpc"}`.
//! - `fps_update`: every half second.
//!
//! ## Error Handling
//!
//! - `-32601`: Method not found
//! - `-32602`: Invalid params (missing or unknown body)
//!
//! ```javascript
//! viewer.postMessage(JSON.stringify({
//!   jsonrpc: "2.0",
//!   method: "focus_body",
//!   params: { body: "Saturn" },
//!   id: 1
//! }), "*");
//! ```

/// Request handling, notifications and the `postMessage` transport.
pub mod web_rpc;
