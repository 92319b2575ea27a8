//! Fixed user-facing texts. The form is French only.

/// Body missing, not JSON, or an empty object.
pub const NO_DATA_RECEIVED: &str = "Pas de données reçues.";

/// A required field is empty or the email is not valid.
pub const INVALID_REQUIRED_FIELDS: &str =
    "Veuillez vérifier les champs obligatoires (Nom, Prénom, Email, Motif).";

/// Storage failed and the transaction was rolled back.
pub const STORAGE_FAILURE: &str =
    "Erreur lors de l'enregistrement des données. Veuillez réessayer.";

pub const SUBMISSION_SAVED: &str = "Formulaire enregistré avec succès.";

pub const INCOMPLETE_SLOT: &str = "Veuillez sélectionner le jour, l'heure et la minute.";

pub const MISSING_REQUIRED_FIELDS: &str = "Veuillez remplir tous les champs obligatoires (*).";

pub const GENERIC_SUBMIT_FAILURE: &str = "Une erreur est survenue lors de la soumission.";

pub const SERVER_UNREACHABLE: &str = "Impossible de joindre le serveur. Vérifiez l'URL.";
