use orrery_core::bridge::protocol::FrameRecord;
use orrery_core::{
    DrawBuffer, InputEvent, InputQueue, Orrery, OrreryConfig, OrreryError, ProtocolLayout,
};

/// Drives the orrery once per animation frame and keeps the shared buffer current.
///
/// The `thread_local!` in `lib.rs` owns the single runner; the host reads the
/// buffer through the pointer accessors after each `tick`.
pub struct OrreryRunner {
    orrery: Orrery,
    input: InputQueue,
    draws: DrawBuffer,
    layout: ProtocolLayout,
    /// Flat frame buffer in the `ProtocolLayout` format.
    buffer: Vec<f32>,
    written: usize,
}

impl OrreryRunner {
    pub fn new(config: OrreryConfig) -> Result<Self, OrreryError> {
        let layout = ProtocolLayout::from_config(&config);
        let draws = DrawBuffer::with_capacity(config.max_draws);
        let buffer = layout.allocate();
        let orrery = Orrery::new(config)?;

        let mut runner = Self {
            orrery,
            input: InputQueue::new(),
            draws,
            layout,
            buffer,
            written: 0,
        };
        runner.write_frame();
        Ok(runner)
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: apply input, advance time, compose, write the buffer.
    pub fn tick(&mut self, dt: f32) {
        self.orrery.tick(dt, &self.input);
        self.input.drain();
        self.write_frame();
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.orrery.resize(width, height);
        self.write_frame();
    }

    /// Load the asset manifest. Parse failures are logged and leave the
    /// previous textures in place.
    pub fn load_manifest(&mut self, json: &str) {
        if let Err(err) = self.orrery.load_manifest(json) {
            log::error!("orrery: manifest rejected: {err}");
        }
    }

    fn write_frame(&mut self) {
        let frame = self.orrery.compose();
        self.orrery.fill_draw_buffer(&frame, &mut self.draws);
        let projection = frame.projection.to_cols_array();
        let skybox_view = frame.skybox_view.to_cols_array();
        self.written = self.layout.write_frame(
            &mut self.buffer,
            &FrameRecord {
                frame: self.orrery.frame_counter(),
                elapsed: frame.elapsed,
                quit_requested: self.orrery.quit_requested(),
                projection: &projection,
                skybox_view: &skybox_view,
                draws: &self.draws,
            },
        );
    }

    pub fn orrery(&self) -> &Orrery {
        &self.orrery
    }

    /// Shared buffer contents.
    pub fn buffer(&self) -> &[f32] {
        &self.buffer
    }

    // ---- Pointer accessors for shared-buffer reads ----

    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    pub fn draw_count(&self) -> u32 {
        self.written as u32
    }

    pub fn ring_split(&self) -> u32 {
        self.draws.ring_split.min(self.written as u32)
    }

    pub fn max_draws(&self) -> u32 {
        self.layout.max_draws as u32
    }

    pub fn draw_data_offset(&self) -> u32 {
        self.layout.draw_data_offset as u32
    }

    pub fn elapsed(&self) -> f32 {
        self.orrery.elapsed()
    }

    pub fn quit_requested(&self) -> bool {
        self.orrery.quit_requested()
    }
}
