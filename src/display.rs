/// A surface whose visible text can be replaced at any time.
/// Repainting is left to whatever owns the surface.
pub trait DisplaySink {
    fn set_text(&mut self, text: &str);
}

impl DisplaySink for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}
