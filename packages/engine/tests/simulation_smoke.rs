use letterfall_engine::{
    DrawSurface, GlyphMetrics, InputEvent, Particle, Simulation, SimulationConfig, SimulationCore,
    Vec2,
};

/// Counts glyph draws; metrics are always undefined, like some older hosts.
#[derive(Default)]
struct CountingSurface {
    clears: usize,
    depth: i32,
    glyphs: Vec<(String, f64, f64)>,
}

impl DrawSurface for CountingSurface {
    fn clear(&mut self, _width: f64, _height: f64) {
        self.clears += 1;
    }
    fn set_font(&mut self, _font: &str) {}
    fn set_fill_style(&mut self, _style: &str) {}
    fn save(&mut self) {
        self.depth += 1;
    }
    fn restore(&mut self) {
        self.depth -= 1;
    }
    fn translate(&mut self, _x: f64, _y: f64) -> Result<(), String> {
        Ok(())
    }
    fn rotate(&mut self, _angle: f64) -> Result<(), String> {
        Ok(())
    }
    fn measure_glyph(&mut self, _glyph: &str) -> Result<GlyphMetrics, String> {
        Ok(GlyphMetrics::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN))
    }
    fn fill_glyph(&mut self, glyph: &str, x: f64, y: f64) -> Result<(), String> {
        self.glyphs.push((glyph.to_string(), x, y));
        Ok(())
    }
}

#[test]
fn facade_pointer_spawns_are_rate_limited() {
    let mut sim = Simulation::new(320, 240, 0.0);
    assert!(sim.pointer_move(10.0, 10.0, 3.0, 0.0, 1000.0));
    assert!(!sim.pointer_move(11.0, 10.0, 3.0, 0.0, 1050.0));
    assert!(sim.pointer_move(12.0, 10.0, 3.0, 0.0, 1100.0));
    assert_eq!(sim.particle_count(), 2);
}

#[test]
fn facade_touch_round_trip() {
    let mut sim = Simulation::new(320, 240, 0.0);
    sim.touch_start(vec![4], vec![100.0], vec![100.0]);
    assert!(sim.touch_move(vec![4], vec![104.0], vec![90.0], 0.0, 0.0, 2000.0));

    let p = sim.core().particles()[0];
    assert_eq!(p.position, Vec2::new(56.0, 42.0));
    assert_eq!(p.velocity, Vec2::new(4.0, -10.0));
}

#[test]
fn facade_with_config_and_stats() {
    let Ok(mut sim) = Simulation::with_config(200, 100, r#"{"gravity": 20, "texts": ["hi"]}"#.to_string(), 0.0) else {
        panic!("config should be accepted");
    };
    sim.enable_frame_stats(true);
    assert!(sim.pointer_move(0.0, 0.0, 0.0, 0.0, 500.0));
    assert_eq!(sim.core().particles()[0].glyph, 'h');

    // vy grows by 20 per step: y = 20, 60, 120, 200 -> culled on the fourth step
    let mut culled = 0;
    for _ in 0..10 {
        culled += sim.step(1.0);
    }
    assert_eq!(culled, 1);
    assert_eq!(sim.particle_count(), 0);
    assert_eq!(sim.frame(), 10);
    assert!(sim.config_json().contains("\"gravity\":20"));
}

#[test]
fn core_frames_render_every_live_particle_centered_or_at_origin() {
    let mut core = SimulationCore::new(300, 300, 0.0);
    core.add_particle(Particle::at_rest('a', Vec2::new(10.0, 10.0)));
    core.handle_input(
        InputEvent::Pointer {
            offset: Vec2::new(50.0, 50.0),
            movement: Vec2::new(1.0, 1.0),
        },
        1.0,
    );

    let mut surface = CountingSurface::default();
    core.run_frame(0.0, &mut surface);
    core.run_frame(16.0, &mut surface);

    assert_eq!(surface.clears, 2);
    assert_eq!(surface.depth, 0);
    assert_eq!(surface.glyphs.len(), 4);
    // NaN metrics -> zero offset
    assert!(surface.glyphs.iter().all(|(_, x, y)| *x == 0.0 && *y == 0.0));
}

#[test]
fn defaults_are_the_documented_tunables() {
    let cfg = SimulationConfig::default();
    assert_eq!(cfg.gravity, 10.0);
    assert_eq!(cfg.spawn_interval, 0.09);
    assert_eq!(cfg.max_speed, 14.0);
    assert_eq!(cfg.max_angular_velocity, 0.06);
    assert_eq!(cfg.touch_offset, 48.0);
    assert_eq!(cfg.cull_factor, 1.5);
    assert!(!cfg.texts.is_empty());
}
