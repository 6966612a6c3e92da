//! Shared setup for integration tests against a mock filesystem API

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use pixelfs_client::{Config, Fs};
use serde_json::{json, Value};
use wiremock::{MockServer, Request, Respond, ResponseTemplate};

pub const ROOT_FOLDER_ID: &str = "u";
pub const ROOT: &str = "123";
pub const PREFIX: &str = "/u/123";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Start a mock server and a filesystem scoped to `/u/123` on it
pub async fn setup_test_env() -> (MockServer, Fs) {
    init_tracing();
    let server = MockServer::start().await;
    let fs = Fs::new(&test_config(&server), ROOT).unwrap();
    (server, fs)
}

pub fn test_config(server: &MockServer) -> Config {
    Config {
        api_url: format!("{}/api", server.uri()),
        root_folder_id: ROOT_FOLDER_ID.to_string(),
        api_key: Some("test-key".to_string()),
        ..Config::default()
    }
}

/// URL path the client requests for a full remote path
pub fn fs_path(full_path: &str) -> String {
    format!("/api/filesystem/{}", urlencoding::encode(full_path))
}

pub fn dir_json(path: &str) -> Value {
    json!({
        "type": "dir",
        "path": path,
        "name": path.rsplit('/').next().unwrap(),
        "created": "2024-01-01T00:00:00Z",
        "modified": "2024-01-02T00:00:00Z",
        "mode_string": "drwxr-xr-x",
        "mode_octal": "755",
        "file_size": 0,
        "file_type": "",
        "sha256_sum": "",
    })
}

pub fn file_json(path: &str, size: u64) -> Value {
    json!({
        "type": "file",
        "path": path,
        "name": path.rsplit('/').next().unwrap(),
        "created": "2024-01-01T00:00:00Z",
        "modified": "2024-01-03T04:05:06.5Z",
        "mode_string": "-rw-r--r--",
        "mode_octal": "644",
        "file_size": size,
        "file_type": "text/plain",
        "sha256_sum": "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
    })
}

pub fn error_json(code: &str, message: &str) -> Value {
    json!({"value": code, "message": message})
}

/// Stat response for `nodes`, base is the last node
pub fn stat_json(nodes: Vec<Value>, children: Vec<Value>) -> Value {
    let base_index = nodes.len() - 1;
    json!({
        "path": nodes,
        "base_index": base_index,
        "children": children,
        "permissions": {"create": true, "read": true, "update": true, "delete": true},
    })
}

/// Tree fixture answering mkdir and delete requests the way the remote
/// service does: `mkdirall` creates every missing ancestor and succeeds on
/// existing directories, non-recursive delete of a non-empty directory fails.
#[derive(Clone)]
pub struct TreeFixture {
    dirs: Arc<Mutex<BTreeSet<String>>>,
}

impl TreeFixture {
    pub fn new(dirs: &[&str]) -> Self {
        Self {
            dirs: Arc::new(Mutex::new(dirs.iter().map(|d| d.to_string()).collect())),
        }
    }

    pub fn dirs(&self) -> Vec<String> {
        self.dirs.lock().unwrap().iter().cloned().collect()
    }

    fn node_path(request: &Request) -> String {
        let encoded = request
            .url
            .path()
            .strip_prefix("/api/filesystem/")
            .unwrap();
        urlencoding::decode(encoded).unwrap().into_owned()
    }
}

impl Respond for TreeFixture {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let path = TreeFixture::node_path(request);
        let mut dirs = self.dirs.lock().unwrap();

        match request.method.as_str() {
            "POST" => {
                let body = String::from_utf8_lossy(&request.body);
                if !body.contains("mkdirall") {
                    return ResponseTemplate::new(400)
                        .set_body_json(error_json("invalid_action", "unsupported"));
                }
                let mut current = String::new();
                for segment in path.split('/').filter(|s| !s.is_empty()) {
                    current.push('/');
                    current.push_str(segment);
                    dirs.insert(current.clone());
                }
                ResponseTemplate::new(200)
            }
            "DELETE" => {
                if !dirs.contains(&path) {
                    return ResponseTemplate::new(404)
                        .set_body_json(error_json("path_not_found", "not found"));
                }
                let child_prefix = format!("{}/", path);
                let has_children = dirs.iter().any(|d| d.starts_with(&child_prefix));
                let recursive = request
                    .url
                    .query_pairs()
                    .any(|(k, v)| k == "recursive" && v == "true");
                if has_children && !recursive {
                    return ResponseTemplate::new(422).set_body_json(error_json(
                        "directory_not_empty",
                        "this directory has children",
                    ));
                }
                dirs.retain(|d| d != &path && !d.starts_with(&child_prefix));
                ResponseTemplate::new(200)
            }
            _ => ResponseTemplate::new(405),
        }
    }
}
