//! Text for everything the console shows. Every line ends with `\n`.

use std::fmt::Write;

use crate::core::action::Outcome;
use crate::core::state::BookEntry;

pub const MENU: &str = "\n--- Gestionnaire de Bibliothèque ---\n\
1. Ajouter un livre\n\
2. Afficher la bibliothèque\n\
3. Marquer un livre comme lu\n\
4. Rechercher par genre\n\
5. Quitter\n";

pub const PROMPT_CHOICE: &str = "Entrez votre choix (1-5) : ";
pub const PROMPT_TITLE: &str = "Entrez le titre du livre : ";
pub const PROMPT_AUTHOR: &str = "Entrez le nom de l'auteur : ";
pub const PROMPT_YEAR: &str = "Entrez l'année de publication : ";
pub const PROMPT_GENRE: &str = "Entrez le genre du livre : ";
pub const PROMPT_MARK_TITLE: &str = "Entrez le titre du livre à marquer : ";
pub const PROMPT_SEARCH_GENRE: &str = "Entrez le genre à rechercher : ";

pub const INVALID_CHOICE: &str = "Choix invalide. Veuillez réessayer.\n";

pub fn invalid_year(input: &str) -> String {
    format!("Année invalide : '{input}'. Veuillez entrer un nombre entier.\n")
}

pub fn year_out_of_range(input: &str) -> String {
    format!(
        "Année hors limites : '{input}'. Veuillez entrer une année entre {} et {}.\n",
        i64::MIN,
        i64::MAX
    )
}

pub fn render(outcome: &Outcome, rule_width: usize) -> String {
    match outcome {
        Outcome::Added { title } => format!("Le livre '{title}' a été ajouté avec succès !\n"),
        Outcome::Empty => "Votre bibliothèque est vide.\n".to_string(),
        Outcome::Listing(entries) => {
            let rule = "-".repeat(rule_width);
            entries.iter().fold(String::new(), |mut out, entry| {
                push_entry(&mut out, entry, &rule);
                out
            })
        }
        Outcome::MarkedRead { title } => format!("Le livre '{title}' a été marqué comme lu.\n"),
        Outcome::NotFound { .. } => "Ce livre n'est pas dans votre bibliothèque.\n".to_string(),
        Outcome::GenreMatches { genre, titles } => {
            let mut out = format!("Livres du genre '{genre}' :\n");
            for title in titles {
                out.push_str(title);
                out.push('\n');
            }
            out
        }
        Outcome::NoGenreMatch { genre } => {
            format!("Aucun livre trouvé dans le genre '{genre}'.\n")
        }
        Outcome::Farewell => "Merci d'avoir utilisé le Gestionnaire de Bibliothèque !\n".to_string(),
    }
}

fn push_entry(out: &mut String, entry: &BookEntry, rule: &str) {
    let book = &entry.book;
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "Titre: {}\nAuteur: {}\nAnnée: {}\nGenre: {}\nStatut: {}\n{rule}\n",
        entry.title,
        book.author,
        book.year,
        book.genre,
        book.status(),
    );
}
