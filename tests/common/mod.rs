//! A canned World Weather Online responder for pipeline tests.
//!
//! Serves fixed bodies keyed by the `q` query parameter from a local
//! `TcpListener`, one connection per request.

#![allow(dead_code)]

use serde_json::json;
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub body: String,
}

pub struct FakeWeatherApi {
    pub endpoint: String,
    requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl FakeWeatherApi {
    pub fn start(responses: Vec<(&str, CannedResponse)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
        let port = listener.local_addr().expect("local address").port();
        let responses: HashMap<String, CannedResponse> = responses
            .into_iter()
            .map(|(place, response)| (place.to_string(), response))
            .collect();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

                let mut request_line = String::new();
                if reader.read_line(&mut request_line).is_err() {
                    continue;
                }
                // Drain headers, GET requests carry no body
                let mut header = String::new();
                while reader.read_line(&mut header).map(|n| n > 2).unwrap_or(false) {
                    header.clear();
                }

                let target = request_line.split_whitespace().nth(1).unwrap_or("/");
                let query = parse_query(target);
                let place = query.get("q").cloned().unwrap_or_default();
                log.lock().expect("request log").push(query);

                let response = responses.get(&place).cloned().unwrap_or(CannedResponse {
                    status: 404,
                    body: "not found".to_string(),
                });
                let reply = format!(
                    "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    response.status,
                    response.body.len(),
                    response.body
                );
                let _ = stream.write_all(reply.as_bytes());
                let _ = stream.flush();
            }
        });

        Self {
            endpoint: format!("http://127.0.0.1:{port}/premium/v1/weather.ashx"),
            requests,
        }
    }

    /// Query parameters of every request received so far.
    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.requests.lock().expect("request log").clone()
    }
}

fn parse_query(target: &str) -> HashMap<String, String> {
    reqwest::Url::parse(&format!("http://localhost{target}"))
        .map(|url| url.query_pairs().into_owned().collect())
        .unwrap_or_default()
}

pub fn climate(query: &str, location_type: &str, max_temps: [f64; 12]) -> CannedResponse {
    const NAMES: [&str; 12] = [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ];
    let months: Vec<_> = max_temps
        .iter()
        .enumerate()
        .map(|(i, max)| {
            json!({
                "index": (i + 1).to_string(),
                "name": NAMES[i],
                "avgMinTemp": format!("{:.1}", max - 8.0),
                "avgMinTemp_F": "0",
                "absMaxTemp": format!("{max:.1}"),
                "absMaxTemp_F": "0",
                "avgDailyRainfall": format!("{:.2}", (i + 1) as f64 / 4.0),
            })
        })
        .collect();
    CannedResponse {
        status: 200,
        body: json!({
            "data": {
                "request": [{"type": location_type, "query": query}],
                "ClimateAverages": [{"month": months}],
            }
        })
        .to_string(),
    }
}

pub fn api_error(messages: &[&str]) -> CannedResponse {
    let errors: Vec<_> = messages.iter().map(|m| json!({ "msg": m })).collect();
    CannedResponse {
        status: 200,
        body: json!({ "data": { "error": errors } }).to_string(),
    }
}

pub fn raw(status: u16, body: &str) -> CannedResponse {
    CannedResponse {
        status,
        body: body.to_string(),
    }
}

pub const SYDNEY_MAX: [f64; 12] = [
    10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0, 26.0, 27.0, 30.0, 28.0,
];
pub const LONDON_MAX: [f64; 12] = [
    8.0, 9.0, 12.0, 15.0, 18.0, 21.0, 23.0, 22.0, 19.0, 15.0, 11.0, 9.0,
];
