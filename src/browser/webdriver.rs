// src/browser/webdriver.rs
//! Minimal W3C WebDriver client (chromedriver, geckodriver, …) over blocking
//! HTTP + JSON. One session per value; the browser is quit when the value is
//! dropped, so every exit path releases it.

use std::thread;
use std::time::{Duration, Instant};

use reqwest::Method;
use reqwest::blocking::Client;
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use super::page::{Locator, Page};
use crate::config::ScrapeOptions;
use crate::config::consts::ELEMENT_POLL_MS;
use crate::core::net;
use crate::error::ScrapeError;

/// W3C element reference key.
const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

const HEIGHT_JS: &str = "return document.body.scrollHeight";
const SCROLL_JS: &str = "window.scrollTo(0, document.body.scrollHeight);";

/// Opaque element reference issued by the driver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementRef(String);

pub struct WebDriverSession {
    http: Client,
    base: String,
    id: String,
    element_poll: Duration,
    open: bool,
}

impl WebDriverSession {
    /// Start a Chrome session on the driver at `base_url`.
    pub fn start(base_url: &str, headless: bool, http_timeout: Duration) -> Result<Self, ScrapeError> {
        let http = net::client(http_timeout)?;
        let base = base_url.trim_end_matches('/').to_string();

        let mut args = vec!["--disable-gpu", "--window-size=1280,2000"];
        if headless {
            args.push("--headless=new");
        }
        let caps = json!({
            "capabilities": {
                "alwaysMatch": {
                    "browserName": "chrome",
                    "goog:chromeOptions": { "args": args }
                }
            }
        });

        let value = send(&http, Method::POST, &join!(&base, "/session"), Some(caps), "new session")?;
        let id = value
            .get("sessionId")
            .and_then(Value::as_str)
            .ok_or_else(|| ScrapeError::driver("new session", "response has no sessionId"))?
            .to_string();
        info!("WebDriver session {id} started at {base}");

        Ok(Self { http, base, id, element_poll: Duration::from_millis(ELEMENT_POLL_MS), open: true })
    }

    pub fn from_options(opts: &ScrapeOptions) -> Result<Self, ScrapeError> {
        Self::start(&opts.webdriver_url, opts.headless, opts.http_timeout())
    }

    pub fn goto(&mut self, url: &str) -> Result<(), ScrapeError> {
        self.command(Method::POST, "/url", Some(json!({ "url": url })), "navigate")?;
        debug!("Navigated to {url}");
        Ok(())
    }

    pub fn execute(&mut self, script: &str) -> Result<Value, ScrapeError> {
        self.command(Method::POST, "/execute/sync", Some(json!({ "script": script, "args": [] })), "execute script")
    }

    /// End the session now and surface any error (Drop would swallow it).
    pub fn quit(mut self) -> Result<(), ScrapeError> {
        self.open = false;
        self.command(Method::DELETE, "", None, "delete session").map(|_| ())
    }

    fn command(&self, method: Method, path: &str, body: Option<Value>, context: &str) -> Result<Value, ScrapeError> {
        let url = format!("{}/session/{}{}", self.base, self.id, path);
        send(&self.http, method, &url, body, context)
    }

    fn find(&self, scope: Option<&ElementRef>, locator: &Locator) -> Result<Vec<ElementRef>, ScrapeError> {
        let path = match scope {
            Some(el) => format!("/element/{}/elements", el.0),
            None => s!("/elements"),
        };
        let body = json!({ "using": locator.strategy(), "value": locator.value() });
        let value = self.command(Method::POST, &path, Some(body), "find elements")?;
        Ok(element_refs(&value))
    }
}

impl Drop for WebDriverSession {
    fn drop(&mut self) {
        if self.open {
            self.open = false;
            match self.command(Method::DELETE, "", None, "delete session") {
                Ok(_) => debug!("WebDriver session {} closed", self.id),
                Err(e) => warn!("Could not close WebDriver session {}: {e}", self.id),
            }
        }
    }
}

impl Page for WebDriverSession {
    type Element = ElementRef;

    fn content_height(&mut self) -> Result<u64, ScrapeError> {
        let v = self.execute(HEIGHT_JS)?;
        v.as_u64()
            .or_else(|| v.as_f64().map(|f| f.max(0.0) as u64))
            .ok_or_else(|| ScrapeError::driver("read height", format!("not a number: {v}")))
    }

    fn scroll_to_bottom(&mut self) -> Result<(), ScrapeError> {
        self.execute(SCROLL_JS).map(|_| ())
    }

    fn wait_for_all(&mut self, locator: &Locator, timeout: Duration) -> Result<Vec<ElementRef>, ScrapeError> {
        let deadline = Instant::now() + timeout;
        loop {
            let found = self.find(None, locator)?;
            if !found.is_empty() || Instant::now() >= deadline {
                return Ok(found);
            }
            thread::sleep(self.element_poll);
        }
    }

    fn find_within(&mut self, scope: &ElementRef, locator: &Locator) -> Result<Vec<ElementRef>, ScrapeError> {
        self.find(Some(scope), locator)
    }

    fn text(&mut self, el: &ElementRef) -> Result<String, ScrapeError> {
        let v = self.command(Method::GET, &format!("/element/{}/text", el.0), None, "element text")?;
        Ok(v.as_str().map(str::to_string).unwrap_or_default())
    }

    fn attribute(&mut self, el: &ElementRef, name: &str) -> Result<Option<String>, ScrapeError> {
        let path = format!("/element/{}/attribute/{}", el.0, name);
        let v = self.command(Method::GET, &path, None, "element attribute")?;
        Ok(v.as_str().map(str::to_string))
    }
}

/// Send one command and unwrap the `value` member of the reply.
fn send(http: &Client, method: Method, url: &str, body: Option<Value>, context: &str) -> Result<Value, ScrapeError> {
    let mut req = http.request(method, url);
    if let Some(b) = body {
        req = req.json(&b);
    }
    let resp = req.send()?;
    let status = resp.status();
    let reply: Value = resp.json()?;
    unwrap_reply(status.is_success(), reply, context)
}

fn unwrap_reply(ok: bool, mut reply: Value, context: &str) -> Result<Value, ScrapeError> {
    let value = reply.get_mut("value").map(Value::take).unwrap_or(Value::Null);
    if ok {
        return Ok(value);
    }
    let error = value.get("error").and_then(Value::as_str).unwrap_or("unknown error");
    let message = value.get("message").and_then(Value::as_str).unwrap_or("");
    Err(ScrapeError::driver(context, format!("{error}: {message}")))
}

fn element_refs(value: &Value) -> Vec<ElementRef> {
    value
        .as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(|e| e.get(ELEMENT_KEY).and_then(Value::as_str))
                .map(|id| ElementRef(id.to_string()))
                .collect()
        })
        .unwrap_or_default()
}
