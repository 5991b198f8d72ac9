//! Basic chat completion example

use llm_client::{ChatRequest, LlmClient, Message};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("LLM_API_KEY")?;
    let client = LlmClient::new(
        "https://openrouter.ai/api/v1",
        "meta-llama/llama-3.3-70b-instruct",
    );

    let response = client
        .chat(
            &api_key,
            ChatRequest::new(client.model())
                .message(Message::system("You are a helpful assistant."))
                .message(Message::user("What is Rust in one sentence?"))
                .temperature(0.7)
                .max_tokens(100),
        )
        .await?;

    println!("Response: {}", response.content);
    if let Some(usage) = response.usage {
        println!("Tokens used: {}", usage.total_tokens);
    }

    Ok(())
}
