use std::io::Cursor;

use bibliotheque::YearPolicy;
use bibliotheque::console::{Session, SessionState};
use bibliotheque::core::SessionError;
use bibliotheque::core::config::ResolvedConfig;

// ============================================================================
// Helper Functions
// ============================================================================

type BufferSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

/// Builds a session reading `lines` (one answer per entry) and writing to a buffer.
fn session_with(lines: &[&str], year_policy: YearPolicy) -> BufferSession {
    let mut input = lines.join("\n");
    input.push('\n');
    let config = ResolvedConfig {
        year_policy,
        ..ResolvedConfig::default()
    };
    Session::new(Cursor::new(input.into_bytes()), Vec::new(), &config)
}

/// Runs a reprompting session to completion and returns everything it printed.
fn run_output(lines: &[&str]) -> String {
    let mut session = session_with(lines, YearPolicy::Reprompt);
    session.run().expect("session should end cleanly");
    String::from_utf8(session.into_output()).unwrap()
}

const DUNE: [&str; 5] = ["1", "Dune", "Herbert", "1965", "Sci-Fi"];

// ============================================================================
// Full Scenario
// ============================================================================

#[test]
fn test_dune_scenario() {
    let mut lines: Vec<&str> = DUNE.to_vec();
    lines.extend(["2", "3", "Dune", "2", "4", "sci-fi", "4", "Romance", "5"]);
    let out = run_output(&lines);

    assert!(out.contains("Le livre 'Dune' a été ajouté avec succès !\n"));

    let unread = "Titre: Dune\nAuteur: Herbert\nAnnée: 1965\nGenre: Sci-Fi\nStatut: Non lu\n\
                  ------------------------------\n";
    let read = "Titre: Dune\nAuteur: Herbert\nAnnée: 1965\nGenre: Sci-Fi\nStatut: Lu\n\
                ------------------------------\n";
    let unread_at = out.find(unread).expect("first listing shows Dune unread");
    let read_at = out.find(read).expect("second listing shows Dune read");
    assert!(unread_at < read_at);

    assert!(out.contains("Le livre 'Dune' a été marqué comme lu.\n"));
    assert!(out.contains("Livres du genre 'sci-fi' :\nDune\n"));
    assert!(out.contains("Aucun livre trouvé dans le genre 'Romance'.\n"));
    assert!(out.ends_with("Merci d'avoir utilisé le Gestionnaire de Bibliothèque !\n"));
}

// ============================================================================
// Library Operations
// ============================================================================

#[test]
fn test_list_empty_library() {
    let out = run_output(&["2", "5"]);
    assert!(out.contains("Votre bibliothèque est vide.\n"));
    assert!(!out.contains("Titre:"));
}

#[test]
fn test_readding_title_overwrites() {
    let mut lines: Vec<&str> = DUNE.to_vec();
    lines.extend(["3", "Dune", "1", "Dune", "Frank Herbert", "1966", "Space Opera", "2", "5"]);
    let out = run_output(&lines);

    assert_eq!(out.matches("Titre: Dune\n").count(), 1);
    assert!(out.contains("Auteur: Frank Herbert\nAnnée: 1966\nGenre: Space Opera\nStatut: Non lu\n"));
    assert!(!out.contains("Auteur: Herbert\n"));
}

#[test]
fn test_listing_keeps_insertion_order() {
    let mut lines: Vec<&str> = DUNE.to_vec();
    lines.extend(["1", "Emma", "Austen", "1815", "Romance", "2", "5"]);
    let out = run_output(&lines);

    let dune = out.find("Titre: Dune").unwrap();
    let emma = out.find("Titre: Emma").unwrap();
    assert!(dune < emma);
}

#[test]
fn test_mark_unknown_title() {
    let mut lines: Vec<&str> = DUNE.to_vec();
    lines.extend(["3", "dune", "2", "5"]);
    let out = run_output(&lines);

    assert!(out.contains("Ce livre n'est pas dans votre bibliothèque.\n"));
    assert!(out.contains("Statut: Non lu\n"));
    assert!(!out.contains("Statut: Lu\n"));
}

#[test]
fn test_mark_read_twice() {
    let mut lines: Vec<&str> = DUNE.to_vec();
    lines.extend(["3", "Dune", "3", "Dune", "2", "5"]);
    let out = run_output(&lines);

    assert_eq!(out.matches("Le livre 'Dune' a été marqué comme lu.\n").count(), 2);
    assert!(out.contains("Statut: Lu\n"));
}

#[test]
fn test_search_genre_ignores_case() {
    let lines = [
        "1", "The Hobbit", "Tolkien", "1937", "Fantasy", //
        "1", "Dune", "Herbert", "1965", "Sci-Fi", //
        "1", "Earthsea", "Le Guin", "1968", "fantasy", //
        "4", "FANTASY", "5",
    ];
    let out = run_output(&lines);
    assert!(out.contains("Livres du genre 'FANTASY' :\nThe Hobbit\nEarthsea\n"));
}

// ============================================================================
// Menu Handling
// ============================================================================

#[test]
fn test_invalid_choices_keep_running() {
    let out = run_output(&["0", "six", "", "5"]);
    assert_eq!(out.matches("Choix invalide. Veuillez réessayer.\n").count(), 3);
    assert_eq!(out.matches("--- Gestionnaire de Bibliothèque ---").count(), 4);
    assert!(out.ends_with("Merci d'avoir utilisé le Gestionnaire de Bibliothèque !\n"));
}

#[test]
fn test_choice_surrounded_by_spaces() {
    let out = run_output(&[" 2 ", "5"]);
    assert!(out.contains("Votre bibliothèque est vide.\n"));
}

#[test]
fn test_input_closed_ends_session() {
    let mut session = session_with(&["2"], YearPolicy::Reprompt);
    session.run().unwrap();
    assert_eq!(session.state(), SessionState::Terminated);
    let out = String::from_utf8(session.into_output()).unwrap();
    assert!(!out.contains("Merci"));
}

#[test]
fn test_prompts_follow_add_order() {
    let out = run_output(&DUNE);
    let title = out.find("Entrez le titre du livre : ").unwrap();
    let author = out.find("Entrez le nom de l'auteur : ").unwrap();
    let year = out.find("Entrez l'année de publication : ").unwrap();
    let genre = out.find("Entrez le genre du livre : ").unwrap();
    assert!(title < author && author < year && year < genre);
}

// ============================================================================
// Year Policy
// ============================================================================

#[test]
fn test_reprompt_policy_recovers() {
    let mut session = session_with(
        &["1", "Dune", "Herbert", "mille", "1965", "Sci-Fi", "5"],
        YearPolicy::Reprompt,
    );
    session.run().unwrap();
    assert_eq!(session.library().get("Dune").map(|b| b.year), Some(1965));
    let out = String::from_utf8(session.into_output()).unwrap();
    assert!(out.contains("Année invalide : 'mille'. Veuillez entrer un nombre entier.\n"));
}

#[test]
fn test_abort_policy_propagates_error() {
    let mut session = session_with(
        &["1", "Dune", "Herbert", "1965", "Sci-Fi", "1", "Emma", "Austen", "1815?", "Romance", "5"],
        YearPolicy::Abort,
    );
    let result = session.run();

    assert!(matches!(
        result,
        Err(SessionError::InvalidYear { ref input, .. }) if input == "1815?"
    ));
    assert_eq!(session.library().len(), 1);
    assert!(session.library().get("Emma").is_none());
}

#[test]
fn test_twenty_digit_year_is_out_of_range() {
    let lines = ["1", "Dune", "Herbert", "99999999999999999999", "1965", "Sci-Fi", "2", "5"];
    let out = run_output(&lines);
    assert!(out.contains("Année hors limites : '99999999999999999999'."));
    assert!(!out.contains("Veuillez entrer un nombre entier"));
    assert!(out.contains("Année: 1965\n"));

    let mut session = session_with(&lines, YearPolicy::Abort);
    assert!(matches!(
        session.run(),
        Err(SessionError::YearOutOfRange { ref input }) if input == "99999999999999999999"
    ));
    assert!(session.library().is_empty());
}
