// ui.rs - Input sampling, tick pacing and raster display

use std::time::{Duration, Instant};

use conway::ZoomEvent;
use eframe::egui;
use egui::{Color32, Key, Pos2, Rect, Sense, TextureOptions, Vec2, ViewportCommand};
use log::error;

use crate::LifeApp;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sample_keys(ctx);

        if self.last_update.elapsed() >= self.update_interval {
            self.run_tick();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_status(ui);
            ui.separator();
            self.draw_raster(ui);
        });

        // Keep ticking even without input
        ctx.request_repaint();
    }
}

impl LifeApp {
    fn sample_keys(&mut self, ctx: &egui::Context) {
        let (pause, restart, step, fullscreen, quit) = ctx.input(|i| {
            (
                i.key_pressed(Key::Space),
                i.key_pressed(Key::R),
                i.key_pressed(Key::ArrowRight),
                i.key_pressed(Key::F),
                i.key_pressed(Key::Escape),
            )
        });

        if pause {
            self.input.toggle_pause = !self.input.toggle_pause;
        }
        self.input.restart |= restart;
        self.input.step_once |= step;

        if fullscreen {
            self.fullscreen = !self.fullscreen;
            ctx.send_viewport_cmd(ViewportCommand::Fullscreen(self.fullscreen));
        }
        if quit {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }

    fn run_tick(&mut self) {
        let input = std::mem::take(&mut self.input);
        match self.simulation.tick(&input) {
            Ok(_) => self.texture_dirty = true,
            Err(e) => error!("tick failed: {}", e),
        }

        self.ticks_in_window += 1;
        let elapsed = self.window_start.elapsed();
        if elapsed >= Duration::from_secs(1) {
            self.tps = self.ticks_in_window as f32 / elapsed.as_secs_f32();
            self.ticks_in_window = 0;
            self.window_start = Instant::now();
        }
    }

    fn draw_status(&self, ui: &mut egui::Ui) {
        let sim = &self.simulation;
        let grid = sim.grid();
        let viewport = sim.viewport();
        let fps = ui.ctx().input(|i| if i.stable_dt > 0.0 { 1.0 / i.stable_dt } else { 0.0 });

        ui.horizontal(|ui| {
            ui.label(format!("TPS: {:.2}", self.tps));
            ui.label(format!("FPS: {:.2}", fps));
            ui.separator();
            ui.label(format!("Generation: {}", sim.generation()));
            ui.label(format!("Live cells: {} / {}", grid.population(), grid.len()));
            ui.separator();
            ui.label(if sim.is_paused() { "⏸ Paused" } else { "▶ Running" });
            if viewport.is_zoomed() {
                ui.label(format!("Zoom: {} (x{:.2})", viewport.zoom_level(), viewport.scale()));
            }
        });
        ui.label("Space: pause/resume   R: restart   Right: step while paused   F: fullscreen   Wheel: zoom   Click: toggle cell");
    }

    fn draw_raster(&mut self, ui: &mut egui::Ui) {
        let (raster_w, raster_h) = (self.simulation.raster().width(), self.simulation.raster().height());

        if self.texture_dirty || self.texture.is_none() {
            let raster = self.simulation.raster();
            let image = egui::ColorImage::from_rgba_unmultiplied([raster_w, raster_h], raster.pixels());
            match &mut self.texture {
                Some(texture) => texture.set(image, TextureOptions::NEAREST),
                None => self.texture = Some(ui.ctx().load_texture("life-raster", image, TextureOptions::NEAREST)),
            }
            self.texture_dirty = false;
        }
        let Some(texture) = &self.texture else { return };

        let viewport = self.simulation.viewport();
        let base = viewport.base_size() as f32;
        let area_size = Vec2::new(base.max(raster_w as f32), base.max(raster_h as f32));
        let (response, painter) = ui.allocate_painter(area_size, Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, Color32::from_gray(20));

        if viewport.is_zoomed() {
            let view = viewport.rect();
            let shown = view.clipped(raster_w, raster_h);
            if !shown.is_empty() {
                let scale = viewport.scale();
                let min = origin
                    + Vec2::new(
                        (shown.min_x - view.min_x) as f32 * scale,
                        (shown.min_y - view.min_y) as f32 * scale,
                    );
                let dest = Rect::from_min_size(
                    min,
                    Vec2::new(shown.width() as f32 * scale, shown.height() as f32 * scale),
                );
                let uv = Rect::from_min_max(
                    Pos2::new(shown.min_x as f32 / raster_w as f32, shown.min_y as f32 / raster_h as f32),
                    Pos2::new(shown.max_x as f32 / raster_w as f32, shown.max_y as f32 / raster_h as f32),
                );
                painter.image(texture.id(), dest, uv, Color32::WHITE);
            }
        } else {
            let dest = Rect::from_min_size(origin, Vec2::new(raster_w as f32, raster_h as f32));
            let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
            painter.image(texture.id(), dest, uv, Color32::WHITE);
        }

        // Everything below is in raster pixels
        let to_raster = |pos: Pos2| {
            let local = pos - origin;
            viewport.display_to_raster(local.x, local.y)
        };

        if let Some(pos) = response.hover_pos() {
            self.input.pointer = Some(to_raster(pos));

            let scroll = ui.input(|i| i.scroll_delta.y);
            if scroll > 0.0 {
                self.input.zoom = Some(ZoomEvent::In);
            } else if scroll < 0.0 {
                self.input.zoom = Some(ZoomEvent::Out);
            }
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.input.click = Some(to_raster(pos));
            }
        }
    }
}
