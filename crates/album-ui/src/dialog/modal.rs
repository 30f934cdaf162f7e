//! Generic modal dialog.

/// Element id of the modal title, referenced by the dialog's label.
pub const MODAL_TITLE_ID: &str = "modal-title";

/// What asked the modal to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The close button in the header.
    CloseButton,
    /// A click on the backdrop.
    Backdrop,
}

/// Visible parts of an open modal.
#[derive(Debug, PartialEq, Eq)]
pub struct ModalContent<'a, B> {
    pub title: Option<&'a str>,
    /// Id of the element labelling the dialog, if titled.
    pub labelled_by: Option<&'static str>,
    pub body: &'a B,
}

type CloseHook = Box<dyn FnMut(CloseReason) + Send>;

/// Overlay dialog holding a body of type `B`.
///
/// Nothing is shown while closed.
pub struct Modal<B> {
    open: bool,
    title: Option<String>,
    body: B,
    on_close: Option<CloseHook>,
}

impl<B: std::fmt::Debug> std::fmt::Debug for Modal<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Modal")
            .field("open", &self.open)
            .field("title", &self.title)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

impl<B> Modal<B> {
    /// Create a closed, untitled modal.
    pub fn new(body: B) -> Self {
        Self {
            open: false,
            title: None,
            body,
            on_close: None,
        }
    }

    /// Set the title shown in the header.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Register a hook run whenever the modal is closed by the user.
    pub fn on_close(mut self, hook: impl FnMut(CloseReason) + Send + 'static) -> Self {
        self.on_close = Some(Box::new(hook));
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close without running the hook.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Id referenced by the dialog's label; only set when titled.
    pub fn labelled_by(&self) -> Option<&'static str> {
        self.title.as_ref().map(|_| MODAL_TITLE_ID)
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    /// Visible content, or `None` while closed.
    pub fn content(&self) -> Option<ModalContent<'_, B>> {
        self.open.then(|| ModalContent {
            title: self.title(),
            labelled_by: self.labelled_by(),
            body: &self.body,
        })
    }

    /// User asked to close. Ignored while closed; returns whether it closed.
    pub fn request_close(&mut self, reason: CloseReason) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        if let Some(hook) = self.on_close.as_mut() {
            hook(reason);
        }
        true
    }

    pub fn click_backdrop(&mut self) -> bool {
        self.request_close(CloseReason::Backdrop)
    }

    pub fn click_close_button(&mut self) -> bool {
        self.request_close(CloseReason::CloseButton)
    }
}
