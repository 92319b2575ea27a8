//! Terminal front end for the contact form.
//!
//! Reads one command per line, feeds it to the form controller and prints
//! the resulting state. Type `aide` for the list of commands.

use agence_core::models::{
    contact::{Civilite, MotifContact},
    slot::{Jour, SlotHour, SlotMinute},
};
use agence_form::{
    FormConfig, FormController, HttpTransport,
    state::{FormMsg, FormState, TextField},
};
use color_eyre::eyre::Result;
use dotenv::dotenv;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

const HELP: &str = "\
Commandes :
  civilite <Mme|M|->          motif <demande_visite|etre_rappele|plus_photos|->
  nom <texte>                 prenom <texte>
  email <texte>               telephone <texte>
  message <texte>
  jour <Lundi..Dimanche|->    heure <7h..20h|->    minute <00m|15m|30m|45m|->
  ajouter                     retirer <n>
  envoyer                     afficher
  aide                        quitter";

/// What a line of input asks for.
enum Input {
    Msg(FormMsg),
    Submit,
    Show,
    Help,
    Quit,
}

fn optional<T: std::str::FromStr<Err = String>>(arg: &str) -> Result<Option<T>, String> {
    if arg == "-" {
        Ok(None)
    } else {
        arg.parse().map(Some)
    }
}

fn parse_line(line: &str) -> Result<Input, String> {
    let line = line.trim();
    let (command, arg) = line.split_once(' ').unwrap_or((line, ""));
    let arg = arg.trim();

    let text = |field: TextField| -> Result<Input, String> {
        Ok(Input::Msg(FormMsg::EditText(field, arg.to_string())))
    };

    match command {
        "civilite" => Ok(Input::Msg(FormMsg::SetCivilite(optional::<Civilite>(arg)?))),
        "motif" => Ok(Input::Msg(FormMsg::SetMotif(optional::<MotifContact>(arg)?))),
        "nom" => text(TextField::Nom),
        "prenom" => text(TextField::Prenom),
        "email" => text(TextField::Email),
        "telephone" => text(TextField::Telephone),
        "message" => text(TextField::Message),
        "jour" => Ok(Input::Msg(FormMsg::SetDraftDay(optional::<Jour>(arg)?))),
        "heure" => Ok(Input::Msg(FormMsg::SetDraftHour(optional::<SlotHour>(arg)?))),
        "minute" => Ok(Input::Msg(FormMsg::SetDraftMinute(optional::<SlotMinute>(arg)?))),
        "ajouter" => Ok(Input::Msg(FormMsg::AddSlot)),
        "retirer" => {
            // Slots are listed from 1
            let position: usize = arg.parse().map_err(|_| format!("Invalid slot number: {}", arg))?;
            match position.checked_sub(1) {
                Some(index) => Ok(Input::Msg(FormMsg::RemoveSlot(index))),
                None => Err(format!("Invalid slot number: {}", arg)),
            }
        }
        "envoyer" => Ok(Input::Submit),
        "afficher" => Ok(Input::Show),
        "aide" | "" => Ok(Input::Help),
        "quitter" => Ok(Input::Quit),
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn print_state(state: &FormState) {
    let form = &state.form;
    let or_dash = |value: &str| if value.is_empty() { "-".to_string() } else { value.to_string() };

    println!(
        "Civilité : {}",
        form.civilite.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string())
    );
    println!("Nom : {}  Prénom : {}", or_dash(&form.nom), or_dash(&form.prenom));
    println!("Email : {}  Téléphone : {}", or_dash(&form.email), or_dash(&form.telephone));
    println!(
        "Motif : {}",
        form.motif_contact.map(|m| m.label()).unwrap_or("-")
    );
    println!("Message : {}", or_dash(&form.message));

    println!(
        "Créneau en cours : {} {} {}",
        state.draft.day.map(|d| d.label()).unwrap_or("-"),
        state.draft.hour.map(|h| h.label()).unwrap_or_else(|| "-".to_string()),
        state.draft.minute.map(|m| m.label()).unwrap_or("-"),
    );
    for (position, slot) in form.disponibilites.iter().enumerate() {
        println!("  {}. {}", position + 1, slot.summary());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    dotenv().ok();

    let config = FormConfig::from_env();
    info!("Posting submissions to {}", config.endpoint_url);
    let mut form = FormController::new(HttpTransport::new(config.endpoint_url));

    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let mut last_notice = None;
    while let Some(line) = lines.next_line().await? {
        let input = match parse_line(&line) {
            Ok(input) => input,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };

        match input {
            Input::Msg(msg) => form.dispatch(msg).await,
            Input::Submit => form.submit().await,
            Input::Show => print_state(form.state()),
            Input::Help => println!("{}", HELP),
            Input::Quit => break,
        }

        let notice = &form.state().notice;
        if notice != &last_notice {
            if let Some(notice) = notice {
                println!("{}", notice.text());
            }
            last_notice = notice.clone();
        }
    }

    Ok(())
}
