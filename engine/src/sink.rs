/// Rendering surface the engine drives. Implementations own every
/// presentation concern; the engine only decides which method to call.
pub trait RenderSink {
    /// Title side channel, invoked once per dispatched query before the body
    /// is rendered.
    fn update_title(&mut self, query: &str);

    /// Shared presentation for every no-match outcome.
    fn not_found(&mut self, query: &str);

    /// Ranked article fragments, best first.
    fn results(&mut self, query: &str, articles: &[&str]);
}
