//! The interactive conversation loop and the one-shot lookup.

use anyhow::Result;
use inquire::{Select, Text};
use weatherbot_core::{
    CheckAnother, Config, Conversation, OpenMeteoClient, StaticFarewell, Step, Turn, WeatherError,
};

const CHECK_ANOTHER: &str = "Check another city";
const END_CONVERSATION: &str = "End conversation";

fn build_conversation(config: &Config) -> Conversation {
    let client = OpenMeteoClient::new(config.max_candidates);
    Conversation::with_confirm_threshold(
        Box::new(client.clone()),
        Box::new(client),
        Box::new(StaticFarewell),
        config.confirm_clicks,
    )
}

/// Run the full conversation until the user ends it.
pub async fn run() -> Result<()> {
    let config = Config::load()?;
    let mut conversation = build_conversation(&config);

    loop {
        match conversation.step() {
            Step::AwaitingCity => {
                let input = Text::new("Which city do you want the weather for?").prompt()?;
                match conversation.submit_city(&input).await {
                    Ok(Turn::Selection) => {}
                    Ok(Turn::Report(outcome)) => print_report(outcome),
                    Err(err) => println!("{err}"),
                }
            }
            Step::AwaitingSelection => {
                let labels: Vec<String> = conversation
                    .candidates()
                    .iter()
                    .map(|candidate| candidate.label.clone())
                    .collect();
                let choice =
                    Select::new("Multiple locations found. Please select one:", labels)
                        .raw_prompt()?;
                let outcome = conversation.confirm_selection(choice.index + 1).await;
                print_report(outcome);
            }
            Step::ShowingReport => {
                let action = Select::new(
                    "What would you like to do next?",
                    vec![CHECK_ANOTHER.to_string(), END_CONVERSATION.to_string()],
                )
                .prompt()?;

                if action == CHECK_ANOTHER {
                    if conversation.check_another_city() == CheckAnother::ConfirmAgain {
                        println!(
                            "Select '{CHECK_ANOTHER}' again to confirm resetting the conversation."
                        );
                    }
                } else {
                    println!("{}", conversation.end_conversation());
                }
            }
            Step::Ended => return Ok(()),
        }
    }
}

/// Resolve one city, disambiguating interactively if needed, print its
/// report and exit. Lookup failures end the process with an error.
pub async fn run_once(city: &str) -> Result<()> {
    let config = Config::load()?;
    let mut conversation = build_conversation(&config);

    let outcome = match conversation.submit_city(city).await? {
        Turn::Report(outcome) => outcome,
        Turn::Selection => {
            let labels: Vec<String> = conversation
                .candidates()
                .iter()
                .map(|candidate| candidate.label.clone())
                .collect();
            let choice =
                Select::new("Multiple locations found. Please select one:", labels).raw_prompt()?;
            conversation.confirm_selection(choice.index + 1).await
        }
    };

    println!("{}", outcome?);
    Ok(())
}

fn print_report(outcome: Result<String, WeatherError>) {
    match outcome {
        Ok(report) => println!("\n{report}\n"),
        Err(err) => println!("{err}"),
    }
}
