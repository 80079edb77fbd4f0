//! Zentrale Konfiguration für den Geofence-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten. Koordinaten- und
//! Radius-Bereiche gehören zum Wire-Vertrag und liegen in `core::validation`.

use serde::{Deserialize, Serialize};

// ── Zeichnen ────────────────────────────────────────────────────────

/// Maximale Anzahl Polygon-Eckpunkte (gilt für Karte und Koordinaten-Eingabe).
pub const MAX_VERTICES: usize = 20;
/// Zeitfenster (ms), in dem ein zweiter Klick als Doppelklick gilt.
pub const DOUBLE_CLICK_WINDOW_MS: u64 = 300;
/// Radius (m), mit dem ein Kreis beim ersten Klick angelegt wird.
pub const DEFAULT_CIRCLE_RADIUS_M: f64 = 100.0;

// ── Karten-Framing ──────────────────────────────────────────────────

/// Kleinste Zoomstufe beim Zentrieren auf einen Zaun.
pub const FRAMING_MIN_ZOOM: f64 = 3.0;
/// Größte Zoomstufe beim Zentrieren auf einen Zaun.
pub const FRAMING_MAX_ZOOM: f64 = 18.0;
/// Rand (Pixel) um den Zaun beim Zentrieren.
pub const FRAMING_PADDING_PX: f64 = 40.0;
/// Kachelgröße der Karte in Pixeln.
pub const TILE_SIZE_PX: f64 = 256.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `geofence_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Zeichnen ────────────────────────────────────────────────
    /// Maximale Anzahl Polygon-Eckpunkte
    pub max_vertices: usize,
    /// Doppelklick-Fenster in Millisekunden
    pub double_click_window_ms: u64,
    /// Start-Radius neuer Kreise in Metern
    pub default_circle_radius_m: f64,

    // ── Framing ─────────────────────────────────────────────────
    /// Kleinste Zoomstufe
    pub framing_min_zoom: f64,
    /// Größte Zoomstufe
    pub framing_max_zoom: f64,
    /// Rand in Pixeln
    pub framing_padding_px: f64,
    /// Kachelgröße in Pixeln
    pub tile_size_px: f64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            max_vertices: MAX_VERTICES,
            double_click_window_ms: DOUBLE_CLICK_WINDOW_MS,
            default_circle_radius_m: DEFAULT_CIRCLE_RADIUS_M,

            framing_min_zoom: FRAMING_MIN_ZOOM,
            framing_max_zoom: FRAMING_MAX_ZOOM,
            framing_padding_px: FRAMING_PADDING_PX,
            tile_size_px: TILE_SIZE_PX,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("geofence_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("geofence_editor.toml")
    }

    /// Doppelklick-Fenster als `Duration`.
    pub fn double_click_window(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.double_click_window_ms)
    }
}
