//! textclipper RPC server — action messages over stdin/stdout.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "action":"saveClip", "clip":{...}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! Exactly one server (and so one mediator) runs per data directory. The
//! `Mutex<App>` serializes requests, so each read-modify-write of a stored
//! collection completes before the next request starts.

use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use textclipper::app::App;
use textclipper::rpc_handler::handle_action;

use serde_json::{json, Value};

fn main() {
    // Prefer TEXTCLIPPER_DATA_DIR, fall back to the executable's directory
    let db_path = if let Ok(dir) = std::env::var("TEXTCLIPPER_DATA_DIR") {
        std::path::PathBuf::from(dir).join("textclipper.db")
    } else if let Ok(exe) = std::env::current_exe() {
        exe.parent()
            .unwrap_or(std::path::Path::new("."))
            .join("textclipper.db")
    } else {
        std::path::PathBuf::from("textclipper.db")
    };
    let app = Mutex::new(
        App::new(db_path.to_str().unwrap_or("textclipper.db"))
            .expect("Failed to initialize textclipper"),
    );

    // Signal ready
    let ready = json!({"event":"ready","version":env!("CARGO_PKG_VERSION")});
    println!("{}", ready);
    io::stdout().flush().unwrap();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                let err = json!({"id":null,"error":format!("parse error: {}",e)});
                println!("{}", err);
                io::stdout().flush().unwrap();
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);
        let action = req.get("action").and_then(|v| v.as_str()).unwrap_or("");

        let result = handle_action(&app, action, &req);

        let response = match result {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => json!({"id": id, "error": err}),
        };
        println!("{}", response);
        io::stdout().flush().unwrap();
    }
}
