//! Externe Mitspieler des Editors: Änderungs-Callback und Fence-Speicher.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::PersistedFence;

/// Empfänger der Shape-Changed-Meldungen (`None` = Form verworfen).
pub trait ShapeChangedSink {
    fn shape_changed(&mut self, payload: Option<&PersistedFence>);
}

impl<F> ShapeChangedSink for F
where
    F: FnMut(Option<&PersistedFence>),
{
    fn shape_changed(&mut self, payload: Option<&PersistedFence>) {
        self(payload)
    }
}

/// Speicher für validierte Zäune.
pub trait FenceRepository {
    /// Übernimmt einen validierten Zaun.
    fn save_fence(&mut self, fence: &PersistedFence) -> anyhow::Result<()>;
}

/// Fence-Speicher im Arbeitsspeicher.
///
/// Klone teilen sich denselben Inhalt, so kann der Aufrufer nach der
/// Übergabe an den Controller weiter lesen.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFenceRepository {
    records: Rc<RefCell<Vec<PersistedFence>>>,
}

impl InMemoryFenceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alle gespeicherten Zäune in Speicher-Reihenfolge.
    pub fn records(&self) -> Vec<PersistedFence> {
        self.records.borrow().clone()
    }

    /// Zuletzt gespeicherter Zaun.
    pub fn latest(&self) -> Option<PersistedFence> {
        self.records.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// Entfernt den Zaun an `index`.
    pub fn remove(&self, index: usize) -> Option<PersistedFence> {
        let mut records = self.records.borrow_mut();
        (index < records.len()).then(|| records.remove(index))
    }
}

impl FenceRepository for InMemoryFenceRepository {
    fn save_fence(&mut self, fence: &PersistedFence) -> anyhow::Result<()> {
        self.records.borrow_mut().push(fence.clone());
        log::info!(
            "Zaun gespeichert ({:?}), {} Einträge",
            fence.kind,
            self.records.borrow().len()
        );
        Ok(())
    }
}
