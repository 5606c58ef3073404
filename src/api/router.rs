use serde::Serialize;

use crate::{
    core::store::StoreError,
    runtime::handle::{RosterHandle, RuntimeError},
};

use super::{ActionRequest, DrawReply, RosterReply};

/// Path of the list endpoint.
pub const LIST_PATH: &str = "/api/list";
/// Path of the add endpoint.
pub const ADD_PATH: &str = "/api/add";
/// Path of the delete endpoint.
pub const DELETE_PATH: &str = "/api/del";
/// Path of the draw endpoint.
pub const DRAW_PATH: &str = "/api/draw";

/// Reply body of a routed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// List, add and delete replies.
    Roster(RosterReply),
    /// Draw replies.
    Draw(DrawReply),
}

/// Status code plus body, ready for a transport to encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Reply body.
    pub payload: Payload,
}

impl ApiResponse {
    fn roster(status: u16, reply: RosterReply) -> Self {
        Self {
            status,
            payload: Payload::Roster(reply),
        }
    }

    fn draw(status: u16, reply: DrawReply) -> Self {
        Self {
            status,
            payload: Payload::Draw(reply),
        }
    }

    /// JSON-encoded body.
    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(&self.payload)
    }
}

/// Maps `/api/*` requests onto roster operations.
#[derive(Clone)]
pub struct Router {
    handle: RosterHandle,
}

impl Router {
    /// Router over `handle`.
    pub fn new(handle: RosterHandle) -> Self {
        Self { handle }
    }

    /// Underlying handle.
    pub fn handle(&self) -> &RosterHandle {
        &self.handle
    }

    /// Dispatches one request. `method` is compared case-insensitively and
    /// `body` is only decoded for add and delete.
    pub async fn dispatch(&self, method: &str, path: &str, body: &[u8]) -> ApiResponse {
        match path {
            LIST_PATH => match self.handle.list().await {
                Ok(names) => ApiResponse::roster(200, RosterReply::ok(names)),
                Err(err) => roster_failure(err),
            },
            ADD_PATH | DELETE_PATH => {
                if !method.eq_ignore_ascii_case("POST") {
                    return ApiResponse::roster(405, RosterReply::fail(format!("{path} requires POST")));
                }
                let req: ActionRequest = match serde_json::from_slice(body) {
                    Ok(req) => req,
                    Err(err) => {
                        return ApiResponse::roster(400, RosterReply::fail(format!("invalid request body: {err}")));
                    }
                };
                let result = if path == ADD_PATH {
                    self.handle.add(req.name).await
                } else {
                    self.handle.delete(req.name).await
                };
                match result {
                    Ok(names) => ApiResponse::roster(200, RosterReply::ok(names)),
                    Err(err) => roster_failure(err),
                }
            }
            DRAW_PATH => match self.handle.draw().await {
                Ok(pair) => ApiResponse::draw(200, DrawReply::ok(pair)),
                Err(err) => {
                    let status = failure_status(&err);
                    ApiResponse::draw(status, DrawReply::fail(err.to_string()))
                }
            },
            _ => ApiResponse::roster(404, RosterReply::fail(format!("no route for {path}"))),
        }
    }
}

fn roster_failure(err: RuntimeError) -> ApiResponse {
    ApiResponse::roster(failure_status(&err), RosterReply::fail(err.to_string()))
}

fn failure_status(err: &RuntimeError) -> u16 {
    match err {
        RuntimeError::Store(StoreError::Rejected(_)) => 200,
        other => {
            log::warn!(target: "raffle_roster", "roster operation failed: {other}");
            500
        }
    }
}
