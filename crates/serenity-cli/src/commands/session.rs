use anyhow::Result;
use serenity_application::ChatSessionUseCase;
use serenity_core::config::AppConfig;
use serenity_core::mood;
use serenity_interaction::OpenAICompletionClient;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

pub fn demo(user_id: &str, texts: &[String]) {
    let usecase = ChatSessionUseCase::new();
    let mut session = usecase.create_session(user_id);
    session = usecase.update_mood_scores(&session, mood::DEFAULT_MOOD, mood::DEFAULT_MOOD);

    for text in texts {
        session = usecase.add_user_message(&session, text);
        let reply = usecase.generate_ai_response(text);
        session = usecase.add_ai_response(&session, &reply);
    }
    session = usecase.end_session(&session);

    for message in &session.messages {
        let speaker = if message.is_user { "You" } else { "Serenity" };
        println!("{speaker}: {}", message.text);
    }
    println!();
    println!("Session:  {}", session.session_id);
    println!("Messages: {}", session.messages.len());
    println!("Duration: {} ms", usecase.session_duration(&session));
    println!(
        "Mood:     {} -> {} ({:+})",
        mood::mood_emoji(session.mood_score_pre),
        mood::mood_emoji(session.mood_score_post),
        usecase.calculate_mood_improvement(&session)
    );
    println!("Valid:    {}", usecase.validate_session(&session));
}

pub async fn respond(
    text: &str,
    remote: bool,
    config: &AppConfig,
    config_dir: Option<&Path>,
) -> Result<()> {
    let mut usecase = ChatSessionUseCase::new()
        .with_response_timeout(Duration::from_secs(config.completion.timeout_secs));

    if remote {
        match OpenAICompletionClient::try_from_config_dir(config_dir) {
            Ok(client) => {
                usecase =
                    usecase.with_completion_client(Arc::new(client.with_settings(&config.completion)));
            }
            Err(e) => tracing::warn!("[serenity] Remote replies unavailable: {}", e),
        }
    }

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let session = usecase.create_session("cli");
    let session = usecase.respond(&session, text, &cancel).await?;
    if let Some(reply) = session.messages.last() {
        println!("{}", reply.text);
    }
    Ok(())
}
