//! End-to-end dispatch tests: router, handlers and real provider clients
//! wired onto a scripted HTTP fetcher and a recording outbound sink.
//! Run with: cargo test --test dispatch_test

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;

use relais_bot::application::errors::{BotError, ProviderError};
use relais_bot::application::messaging::MessageDispatcher;
use relais_bot::domain::entities::{Guild, Message, User, MAX_MESSAGE_LEN};
use relais_bot::domain::traits::{Bot, BotInfo};
use relais_bot::infrastructure::config::{Config, Secrets};
use relais_bot::infrastructure::http::{ApiRequest, ApiResponse, HttpFetcher};
use relais_bot::infrastructure::providers::build_context;

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

const BOT_ID: &str = "1000";

/// Collects everything the dispatcher sends
#[derive(Default)]
struct RecordingBot {
    sent: Mutex<Vec<(String, String)>>,
    fail_sends: bool,
}

impl RecordingBot {
    fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().iter().map(|(_, t)| t.clone()).collect()
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, channel_id: &str, text: &str) -> Result<(), BotError> {
        self.sent
            .lock()
            .unwrap()
            .push((channel_id.to_string(), text.to_string()));
        if self.fail_sends {
            return Err(BotError::Platform("channel gone".to_string()));
        }
        Ok(())
    }

    fn bot_info(&self) -> BotInfo {
        BotInfo::new(BOT_ID, "relais")
    }
}

/// Answers by URL; unknown URLs fail like a dead host
#[derive(Default)]
struct ScriptedFetcher {
    routes: HashMap<String, ApiResponse>,
    calls: Mutex<Vec<ApiRequest>>,
}

impl ScriptedFetcher {
    fn route(mut self, url: &str, status: u16, body: &str) -> Self {
        self.routes.insert(url.to_string(), ApiResponse::new(status, body));
        self
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpFetcher for ScriptedFetcher {
    async fn get(&self, request: &ApiRequest) -> Result<ApiResponse, ProviderError> {
        self.calls.lock().unwrap().push(request.clone());
        self.routes
            .get(&request.url)
            .cloned()
            .ok_or_else(|| ProviderError::Transport("connection refused".to_string()))
    }
}

fn config() -> Config {
    let mut config = Config::default();
    config.providers.imgflip_url = "http://memes.test".to_string();
    config.providers.jokeapi_url = "http://jokes.test".to_string();
    config.providers.blagues_url = "http://blagues.test".to_string();
    config.providers.openweather_url = "http://weather.test".to_string();
    config.providers.newsapi_url = "http://news.test".to_string();
    config
}

fn secrets() -> Secrets {
    Secrets::from_lookup(|name| Some(format!("{}-value", name))).unwrap()
}

fn dispatcher(fetcher: Arc<ScriptedFetcher>) -> MessageDispatcher {
    MessageDispatcher::new(build_context(&config(), &secrets(), fetcher))
}

fn msg(text: &str) -> Message {
    Message::new("42", User::new("7", "alice"), text)
}

async fn replies(fetcher: ScriptedFetcher, message: Message) -> (Vec<String>, Arc<ScriptedFetcher>) {
    ensure_init();
    let fetcher = Arc::new(fetcher);
    let bot = RecordingBot::default();
    dispatcher(fetcher.clone()).handle(&bot, &message).await;
    (bot.sent(), fetcher)
}

#[tokio::test]
async fn test_non_commands_send_nothing() {
    for text in ["hello", "!", "!unknown", "?ping", " !ping", ""] {
        let (sent, fetcher) = replies(ScriptedFetcher::default(), msg(text)).await;
        assert!(sent.is_empty(), "{:?} produced {:?}", text, sent);
        assert_eq!(fetcher.call_count(), 0);
    }
}

#[tokio::test]
async fn test_own_messages_are_ignored() {
    let own = Message::new("42", User::new(BOT_ID, "relais"), "!ping");
    let (sent, _) = replies(ScriptedFetcher::default(), own).await;
    assert!(sent.is_empty());
}

#[tokio::test]
async fn test_ping_and_echo() {
    let (sent, _) = replies(ScriptedFetcher::default(), msg("!ping")).await;
    assert_eq!(sent, vec!["Pong!"]);

    let (sent, _) = replies(ScriptedFetcher::default(), msg("!echo hello world")).await;
    assert_eq!(sent, vec!["hello world"]);
}

#[tokio::test]
async fn test_weather_without_location_makes_no_call() {
    let (sent, fetcher) = replies(ScriptedFetcher::default(), msg("!weather")).await;
    assert_eq!(sent.len(), 1);
    assert!(sent[0].contains("!weather Paris"));
    assert_eq!(fetcher.call_count(), 0);
}

#[tokio::test]
async fn test_weather_success() {
    let fetcher = ScriptedFetcher::default().route(
        "http://weather.test",
        200,
        r#"{"weather":[{"description":"pluie légère"}],"main":{"temp":9.4}}"#,
    );
    let (sent, fetcher) = replies(fetcher, msg("!weather Brest")).await;
    assert_eq!(sent, vec!["Météo à Brest : pluie légère, Température : 9.4°C"]);

    let calls = fetcher.calls.lock().unwrap();
    assert_eq!(calls[0].query_value("q"), Some("Brest"));
    assert_eq!(calls[0].query_value("appid"), Some("OPENWEATHER_API_KEY-value"));
}

#[tokio::test]
async fn test_joke_eng_shapes() {
    let fetcher =
        ScriptedFetcher::default().route("http://jokes.test", 200, r#"{"type":"single","joke":"X"}"#);
    let (sent, _) = replies(fetcher, msg("!jokeEng")).await;
    assert_eq!(sent, vec!["X"]);

    let fetcher = ScriptedFetcher::default().route(
        "http://jokes.test",
        200,
        r#"{"type":"twopart","setup":"S","delivery":"D"}"#,
    );
    let (sent, _) = replies(fetcher, msg("!jokeEng")).await;
    assert_eq!(sent, vec!["S\nD"]);
}

#[tokio::test]
async fn test_joke_fr_uses_token() {
    let fetcher = ScriptedFetcher::default().route(
        "http://blagues.test",
        200,
        r#"{"joke":"Question","answer":"Réponse"}"#,
    );
    let (sent, fetcher) = replies(fetcher, msg("!jokeFr")).await;
    assert_eq!(sent, vec!["Question\nRéponse"]);
    let calls = fetcher.calls.lock().unwrap();
    assert_eq!(calls[0].bearer.as_deref(), Some("BLAGUES_API_TOKEN-value"));
}

#[tokio::test]
async fn test_non_200_gives_exactly_one_fallback() {
    let cases = [
        ("!meme", "http://memes.test", "Erreur de service de memes. Statut : 500"),
        ("!jokeEng", "http://jokes.test", "Je n'ai pas pu trouver de blague pour le moment. 😞"),
        ("!weather Paris", "http://weather.test", "Impossible d'obtenir les informations météorologiques. 😞"),
        ("!news", "http://news.test", "Je ne peux pas récupérer les nouvelles en ce moment."),
    ];
    for (text, url, expected) in cases {
        let fetcher = ScriptedFetcher::default().route(url, 500, "oops");
        let (sent, fetcher) = replies(fetcher, msg(text)).await;
        assert_eq!(sent, vec![expected.to_string()], "for {}", text);
        assert_eq!(fetcher.call_count(), 1, "no retries for {}", text);
    }
}

#[tokio::test]
async fn test_transport_failure_gives_fallback() {
    // No routes: every call fails at the transport level
    let (sent, _) = replies(ScriptedFetcher::default(), msg("!jokeFr")).await;
    assert_eq!(sent, vec!["Je n'ai pas réussi à trouver une blague pour le moment. 😞"]);

    let (sent, _) = replies(ScriptedFetcher::default(), msg("!meme")).await;
    assert_eq!(sent, vec!["Impossible de charger un meme. Essayez à nouveau plus tard."]);
}

#[tokio::test]
async fn test_meme_success() {
    let fetcher = ScriptedFetcher::default().route(
        "http://memes.test",
        200,
        r#"{"success":true,"data":{"memes":[{"name":"only","url":"https://i.imgflip.com/only.jpg"}]}}"#,
    );
    let (sent, _) = replies(fetcher, msg("!meme")).await;
    assert_eq!(sent, vec!["https://i.imgflip.com/only.jpg"]);
}

#[tokio::test]
async fn test_news_is_split_without_loss() {
    let long = "x".repeat(700);
    let articles: Vec<String> = (1..=5)
        .map(|i| {
            format!(
                r#"{{"title":"Titre {i}","description":"{long}","url":"https://news.test/{i}"}}"#
            )
        })
        .collect();
    let body = format!(r#"{{"status":"ok","articles":[{}]}}"#, articles.join(","));
    let fetcher = ScriptedFetcher::default().route("http://news.test", 200, &body);

    let (sent, fetcher) = replies(fetcher, msg("!news")).await;
    assert!(sent.len() >= 2);
    assert!(sent.iter().all(|m| m.chars().count() <= MAX_MESSAGE_LEN));
    let joined = sent.concat();
    for i in 1..=5 {
        assert_eq!(joined.matches(&format!("**Titre {}**", i)).count(), 1);
    }
    assert_eq!(joined.matches(&long).count(), 5);

    let calls = fetcher.calls.lock().unwrap();
    assert_eq!(calls[0].query_value("pageSize"), Some("5"));
    assert_eq!(calls[0].query_value("country"), Some("fr"));
}

#[tokio::test]
async fn test_userinfo_without_mention() {
    let (sent, _) = replies(ScriptedFetcher::default(), msg("!userinfo")).await;
    assert_eq!(sent, vec!["Veuillez mentionner un utilisateur."]);
}

#[tokio::test]
async fn test_serverinfo_never_exceeds_limit() {
    let members: Vec<String> = (0..500).map(|i| format!("utilisateur{}", i)).collect();
    let message = msg("!serverinfo").with_guild(Guild::new("1", "Grand serveur").with_members(members));
    let (sent, _) = replies(ScriptedFetcher::default(), message).await;
    assert_eq!(sent.len(), 1);
    assert!(sent[0].chars().count() <= MAX_MESSAGE_LEN);
    assert!(sent[0].ends_with("La liste des membres est trop longue pour être affichée."));
}

#[tokio::test]
async fn test_send_failures_do_not_escape() {
    ensure_init();
    let bot = RecordingBot {
        fail_sends: true,
        ..Default::default()
    };
    let dispatcher = dispatcher(Arc::new(ScriptedFetcher::default()));
    dispatcher.handle(&bot, &msg("!help")).await;
    dispatcher.handle(&bot, &msg("!ping")).await;
    assert_eq!(bot.sent().len(), 2);
}

#[tokio::test]
async fn test_replies_go_to_origin_channel() {
    ensure_init();
    let bot = RecordingBot::default();
    let dispatcher = dispatcher(Arc::new(ScriptedFetcher::default()));
    let message = Message::new("channel-9", User::new("7", "alice"), "!ping");
    dispatcher.handle(&bot, &message).await;
    assert_eq!(bot.sent.lock().unwrap()[0].0, "channel-9");
}
