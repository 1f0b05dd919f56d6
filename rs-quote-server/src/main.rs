use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::{get, middleware, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use log::{error, info};
use serde::{Deserialize, Serialize};

use rs_quote_core::{lookup, QuoteCatalog, QUICK_TOPICS};

/// Command-line options, each with an environment fallback.
#[derive(Parser, Debug)]
#[command(name = "rs-quote-server", version, about = "HTTP API for topic-based quote lookup")]
struct Args {
	/// Address to bind
	#[arg(long, env = "QUOTE_HOST", default_value = "127.0.0.1")]
	host: String,

	/// Port to bind
	#[arg(long, env = "QUOTE_PORT", default_value_t = 5000)]
	port: u16,

	/// JSON catalog file, or a directory of them. Bundled dataset if absent.
	#[arg(long, env = "QUOTE_CATALOG")]
	catalog: Option<PathBuf>,
}

/// Query parameters for the `/v1/quotes` endpoint
#[derive(Deserialize)]
struct QuoteQuery {
	topic: Option<String>,
}

/// Body returned when the topic is rejected before lookup.
#[derive(Serialize)]
struct InvalidBody {
	status: &'static str,
	reason: String,
}

/// HTTP GET endpoint `/v1/quotes`
///
/// Returns up to three quotes of the topic, or the "no quotes found"
/// placeholder. A missing or blank topic is a `400`.
#[get("/v1/quotes")]
async fn get_quotes(catalog: web::Data<QuoteCatalog>, query: web::Query<QuoteQuery>) -> impl Responder {
	let topic = query.topic.as_deref().unwrap_or_default();

	match lookup(topic, &catalog) {
		Ok(outcome) => HttpResponse::Ok().json(outcome),
		Err(e) => HttpResponse::BadRequest().json(InvalidBody {
			status: "invalid",
			reason: e.user_message(),
		}),
	}
}

#[get("/v1/topics")]
async fn get_topics(catalog: web::Data<QuoteCatalog>) -> impl Responder {
	HttpResponse::Ok().json(catalog.topics())
}

#[get("/v1/quick_topics")]
async fn get_quick_topics() -> impl Responder {
	HttpResponse::Ok().json(QUICK_TOPICS)
}

fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(get_quotes)
		.service(get_topics)
		.service(get_quick_topics);
}

/// Main entry point for the server.
///
/// Loads the catalog once and shares it read-only between workers, then
/// starts an Actix-web HTTP server on the configured address.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
	let args = Args::parse();

	let catalog = match QuoteCatalog::load_or_bundled(args.catalog.as_deref()) {
		Ok(catalog) => catalog,
		Err(e) => {
			error!("Failed to load catalog: {e}");
			return Err(std::io::Error::other(e));
		}
	};
	info!(
		"Serving {} topics ({} quotes) on {}:{}",
		catalog.len(),
		catalog.quote_count(),
		args.host,
		args.port
	);

	let shared_catalog = web::Data::new(catalog);

	HttpServer::new(move || {
		App::new()
			.app_data(shared_catalog.clone())
			.wrap(middleware::Logger::default())
			.wrap(Cors::default().allow_any_origin().allowed_methods(vec!["GET"]))
			.configure(configure)
	})
		.bind((args.host.as_str(), args.port))?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::http::StatusCode;
	use actix_web::test::{call_and_read_body_json, call_service, init_service, read_body_json, TestRequest};
	use serde_json::Value;

	fn catalog() -> web::Data<QuoteCatalog> {
		let catalog = QuoteCatalog::from_json(r#"{"life": ["A", "B", "C", "D"], "love": ["L"]}"#).unwrap();
		web::Data::new(catalog)
	}

	#[actix_web::test]
	async fn quotes_returns_a_selection() {
		let app = init_service(App::new().app_data(catalog()).configure(configure)).await;
		let req = TestRequest::get().uri("/v1/quotes?topic=%20Life%20").to_request();
		let body: Value = call_and_read_body_json(&app, req).await;

		assert_eq!(body["status"], "selected");
		let quotes = body["quotes"].as_array().unwrap();
		assert_eq!(quotes.len(), 3);
		for quote in quotes {
			assert!(["A", "B", "C", "D"].contains(&quote.as_str().unwrap()));
		}
	}

	#[actix_web::test]
	async fn unknown_topic_is_ok_and_empty() {
		let app = init_service(App::new().app_data(catalog()).configure(configure)).await;
		let req = TestRequest::get().uri("/v1/quotes?topic=xyz").to_request();
		let resp = call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::OK);

		let body: Value = read_body_json(resp).await;
		assert_eq!(body["status"], "empty");
		assert_eq!(
			body["message"],
			"No quotes found for this topic. Try \"motivation\", \"life\", or \"love\"."
		);
	}

	#[actix_web::test]
	async fn blank_or_missing_topic_is_a_bad_request() {
		let app = init_service(App::new().app_data(catalog()).configure(configure)).await;
		for uri in ["/v1/quotes?topic=%20%20", "/v1/quotes"] {
			let req = TestRequest::get().uri(uri).to_request();
			let resp = call_service(&app, req).await;
			assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");

			let body: Value = read_body_json(resp).await;
			assert_eq!(body["status"], "invalid");
			assert_eq!(body["reason"], "Please enter a topic to find quotes.");
		}
	}

	#[actix_web::test]
	async fn topics_are_listed_sorted() {
		let app = init_service(App::new().app_data(catalog()).configure(configure)).await;
		let req = TestRequest::get().uri("/v1/topics").to_request();
		let body: Vec<String> = call_and_read_body_json(&app, req).await;
		assert_eq!(body, vec!["life", "love"]);
	}

	#[actix_web::test]
	async fn quick_topics_are_listed() {
		let app = init_service(App::new().configure(configure)).await;
		let req = TestRequest::get().uri("/v1/quick_topics").to_request();
		let body: Vec<String> = call_and_read_body_json(&app, req).await;
		assert_eq!(body, QUICK_TOPICS);
	}

	#[test]
	fn args_default_to_local_port_5000() {
		let args = Args::try_parse_from(["rs-quote-server"]).unwrap();
		assert_eq!(args.host, "127.0.0.1");
		assert_eq!(args.port, 5000);
		assert!(args.catalog.is_none());
	}
}
