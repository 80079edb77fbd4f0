//! Geofence-Editor (Kommandozeile).
//!
//! Lädt optional einen gespeicherten Zaun (JSON), prüft ihn über den
//! Controller und gibt Wire-Format und Karten-Ausschnitt aus.

use anyhow::Context;
use geofence_editor::{
    EditorOptions, FenceEditController, FenceEditState, FenceIntent, InMemoryFenceRepository,
    PersistedFence, SaveOutcome,
};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Geofence-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = EditorOptions::config_path();
    let options = EditorOptions::load_from_file(&config_path);

    let Some(path) = std::env::args().nth(1) else {
        println!("Aufruf: geofence-editor <zaun.json>");
        return Ok(());
    };

    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("Zaun-Datei nicht lesbar: {}", path))?;
    let record = PersistedFence::from_json(&json)?;

    let repository = InMemoryFenceRepository::new();
    let mut state = FenceEditState::with_options(options);
    let mut controller = FenceEditController::new(
        |payload: Option<&PersistedFence>| log::debug!("Form geändert: {:?}", payload),
        repository.clone(),
    );

    controller.handle_intent(&mut state, FenceIntent::LoadFenceRequested { record })?;
    controller.handle_intent(&mut state, FenceIntent::CenterOnShapeRequested)?;

    match controller.save(&mut state)? {
        SaveOutcome::Saved(saved) => println!("{}", saved.to_json()?),
        SaveOutcome::Rejected(failure) => {
            println!("Zaun ungültig: {}", failure);
        }
    }

    if let Some(framing) = state.view.framing {
        println!(
            "Ausschnitt: Mitte ({:.6}, {:.6}), Zoom {}",
            framing.center.latitude, framing.center.longitude, framing.zoom
        );
    }
    log::info!("{} Zaun/Zäune gespeichert", repository.len());

    Ok(())
}
