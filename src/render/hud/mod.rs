//! HUD overlay: egui panels drawn over the scene.
//!
//! Hosts the PTO sliders and the live simulation readouts. Slider movements
//! come out as control events carrying raw positions; the control surface
//! maps them to engineering units.

mod panels;
mod state;
mod theme;
mod widgets;

pub use state::HudState;
pub use theme::{HudColors, HudTheme};

use egui::Context;
use egui_wgpu::ScreenDescriptor;
use winit::event::WindowEvent;
use winit::window::Window;

use crate::control::UiEvent;

/// Per-frame values shown by the readout panels
#[derive(Debug, Clone, Copy, Default)]
pub struct HudReadout {
    pub time_s: f64,
    pub position_m: f64,
    pub velocity_m_per_s: f64,
    pub spring_length_m: f64,
    pub spring_force_n: f64,
    pub stiffness_n_per_m: f64,
    pub damping_n_s_per_m: f64,
    pub fps: f64,
}

/// HUD overlay manager integrating egui with wgpu
pub struct HudOverlay {
    /// Panel visibility and slider positions
    pub state: HudState,
    /// Theme configuration
    pub theme: HudTheme,
    /// egui context
    ctx: Context,
    /// egui-winit state
    egui_state: egui_winit::State,
    /// egui-wgpu renderer
    renderer: egui_wgpu::Renderer,
    /// Slider events produced since the last drain
    pending_events: Vec<UiEvent>,
}

impl HudOverlay {
    /// Create a new HUD overlay
    pub fn new(
        window: &Window,
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        state: HudState,
    ) -> Self {
        let ctx = Context::default();
        let theme = HudTheme::default();

        theme.apply(&ctx);

        let viewport_id = ctx.viewport_id();
        let egui_state = egui_winit::State::new(
            ctx.clone(),
            viewport_id,
            window,
            Some(window.scale_factor() as f32),
            None,
        );

        let renderer = egui_wgpu::Renderer::new(device, surface_format, None, 1);

        Self {
            state,
            theme,
            ctx,
            egui_state,
            renderer,
            pending_events: Vec::new(),
        }
    }

    /// Handle window events, returns true if egui consumed the event
    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(window, event);
        response.consumed
    }

    /// Drain the slider events produced since the last call.
    ///
    /// The events are in emission order, so replaying them against the
    /// control surface leaves the latest position in effect.
    pub fn take_events(&mut self) -> Vec<UiEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Run the UI for this frame.
    ///
    /// Returns paint jobs and texture delta for the renderer; slider events
    /// accumulate until [`take_events`](Self::take_events).
    pub fn run(
        &mut self,
        window: &Window,
        readout: &HudReadout,
    ) -> (Vec<egui::ClippedPrimitive>, egui::TexturesDelta) {
        let raw_input = self.egui_state.take_egui_input(window);

        let state = &mut self.state;
        let pending = &mut self.pending_events;
        let output = self.ctx.run(raw_input, |ctx| {
            pending.extend(panels::render_panels(ctx, state, readout));
        });

        self.egui_state
            .handle_platform_output(window, output.platform_output);

        let pixels_per_point = self.ctx.pixels_per_point();
        let primitives = self.ctx.tessellate(output.shapes, pixels_per_point);

        (primitives, output.textures_delta)
    }

    /// Paint the HUD to the screen
    pub fn paint(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        screen_descriptor: ScreenDescriptor,
        paint_jobs: Vec<egui::ClippedPrimitive>,
        textures_delta: egui::TexturesDelta,
    ) {
        for (id, image_delta) in &textures_delta.set {
            self.renderer
                .update_texture(device, queue, *id, image_delta);
        }

        self.renderer
            .update_buffers(device, queue, encoder, &paint_jobs, &screen_descriptor);

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load, // Don't clear - render on top
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.renderer
                .render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        for id in &textures_delta.free {
            self.renderer.free_texture(id);
        }
    }

    /// Get screen descriptor from window size
    pub fn screen_descriptor(&self, window: &Window) -> ScreenDescriptor {
        let size = window.inner_size();
        ScreenDescriptor {
            size_in_pixels: [size.width, size.height],
            pixels_per_point: window.scale_factor() as f32,
        }
    }

    /// Toggle HUD visibility
    pub fn toggle_hud(&mut self) {
        self.state.toggle_hud();
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        self.state.toggle_help();
    }

    /// Check if HUD wants to capture keyboard input
    pub fn wants_keyboard_input(&self) -> bool {
        self.ctx.wants_keyboard_input()
    }

    /// Check if HUD wants to capture mouse input
    pub fn wants_pointer_input(&self) -> bool {
        self.ctx.wants_pointer_input()
    }
}
