use anyhow::Result;
use derive_more::Display;
use inquire::{Select, Text};
use project_input::consts::{LOG_FILE, TEMPLATES_FILE};
use project_input::page::Page;
use project_input::surface::{InputElement, InputField, InputKind, Notifier};
use project_input::templates::Templates;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// Représente un menu texte
trait Menu {
    /// Contenu du menu: None pour terminer, Some(()) pour le relancer.
    fn enter(&mut self) -> Result<MenuExit>;

    /// Lance le menu en boucle, en interceptant les erreurs,
    /// sauf si le menu souhaite quitter.
    fn enter_loop(&mut self) {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                eprintln!("Erreur: {error}");
            }
        }
    }
}

/// Alerte affichée sur la sortie d'erreur
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        eprintln!("[!] {message}");
    }
}

struct App {
    page: Page<ConsoleNotifier>,
}

impl App {
    fn new(page: Page<ConsoleNotifier>) -> Self {
        App { page }
    }

    fn start(&mut self) -> Result<()> {
        println!("Bienvenue, ajoutez vos projets.");
        self.enter_loop();
        Ok(())
    }

    /// Prompts every input of the form, starting from what it currently
    /// holds, then submits it.
    fn fill_and_submit(&mut self) -> Result<()> {
        fill_inputs(self.page.form.inputs(), |input| {
            let message = format!("{}:", input.label());
            let current = input.value();
            let mut prompt = Text::new(&message).with_initial_value(&current);
            if input.kind() == InputKind::Number {
                prompt = prompt.with_help_message("Un nombre");
            }
            Ok(prompt.prompt()?)
        })?;

        if let Some(draft) = self.page.form.submit_handler() {
            println!("[*] {draft}");
        }
        Ok(())
    }
}

/// Asks for every answer before writing any of them, so a cancelled prompt
/// leaves the form untouched.
fn fill_inputs<F>(inputs: [&InputField; 3], mut ask: F) -> Result<()>
where
    F: FnMut(&InputField) -> Result<String>,
{
    let mut answers = Vec::with_capacity(inputs.len());
    for input in inputs {
        answers.push(ask(input)?);
    }

    for (input, answer) in inputs.iter().zip(&answers) {
        input.set_value(answer);
    }
    Ok(())
}

impl Menu for App {
    fn enter(&mut self) -> Result<MenuExit> {
        #[derive(EnumIter, Display)]
        enum Choice {
            #[display("Ajouter un projet")]
            AddProject,
            #[display("Afficher la page")]
            ShowPage,
            #[display("Quitter")]
            Exit,
        }

        let choice = Select::new("Que voulez-vous faire ?", Choice::iter().collect()).prompt()?;

        match choice {
            Choice::AddProject => self.fill_and_submit()?,
            Choice::ShowPage => println!("{}", self.page.host),
            Choice::Exit => return Ok(MENU_EXIT),
        }
        Ok(MENU_LOOP)
    }
}

fn main() -> anyhow::Result<()> {
    simple_logging::log_to_file(LOG_FILE, log::LevelFilter::Info)?;

    let templates = Templates::open(TEMPLATES_FILE.into())?;
    let page = Page::mount(&templates, ConsoleNotifier)?;
    App::new(page).start()
}
