mod tests {
    use myrtio_light_programs::{
        Config, ConfigError, ConfigValue, FrameContext, Geometry, Instant, LightProgram,
        ProgramError, ProgramId, ProgramPhase, ProgramSlot, Rgb, base_schema, hsv_to_rgb,
    };

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const CYAN: Rgb = Rgb {
        r: 0,
        g: 255,
        b: 255,
    };

    const X: [f32; 3] = [0.0, 1.0, 2.0];
    const Y: [f32; 3] = [0.0, 0.0, 0.0];

    fn geometry() -> Geometry<'static> {
        Geometry::new(&X, &Y, 2.0, 0.0).unwrap()
    }

    #[test]
    fn test_program_id_registry() {
        for id in ProgramId::ALL {
            assert_eq!(ProgramId::parse_from_str(id.as_str()), Some(id));
            assert_eq!(ProgramId::from_raw(id as u8), Some(id));
            assert_eq!(id.to_slot(1).id(), id);
            assert!(id.config_schema().is_ok());
        }
        assert_eq!(ProgramId::parse_from_str("radial"), Some(ProgramId::Radial));
        assert_eq!(ProgramId::parse_from_str("solid"), Some(ProgramId::Solid));
        assert_eq!(ProgramId::parse_from_str("aurora"), None);
        assert_eq!(ProgramId::from_raw(2), None);
    }

    #[test]
    fn test_activate_with_defaults() {
        let program = LightProgram::activate_with_defaults(ProgramId::Radial, geometry(), 5).unwrap();

        assert_eq!(program.id(), ProgramId::Radial);
        assert_eq!(program.phase(), ProgramPhase::Created);
        assert_eq!(program.time(), Instant::from_millis(0));
        assert_eq!(program.number_of_leds(), 3);
        assert_eq!(program.config().number("escala"), Ok(10.0));
        assert_eq!(program.schema(), &ProgramId::Radial.config_schema().unwrap());
    }

    #[test]
    fn test_activate_rejects_incomplete_config() {
        let config = Config::from_defaults(&base_schema()).unwrap();
        assert_eq!(
            LightProgram::activate(ProgramId::Radial, geometry(), config, 1).err(),
            Some(ProgramError::Config(ConfigError::MissingParam { name: "escala" }))
        );
    }

    #[test]
    fn test_activate_rejects_foreign_config() {
        let radial = ProgramId::Radial.config_schema().unwrap();
        let config = Config::from_defaults(&radial).unwrap();
        assert_eq!(
            LightProgram::activate(ProgramId::Solid, geometry(), config, 1).err(),
            Some(ProgramError::Config(ConfigError::MissingParam { name: "hue" }))
        );
    }

    #[test]
    fn test_phase_after_first_frame() {
        let mut program = LightProgram::activate_with_defaults(ProgramId::Solid, geometry(), 0).unwrap();
        let mut leds = [BLACK; 3];

        program.draw_frame(&mut leds);
        assert_eq!(program.phase(), ProgramPhase::Running);
        assert_eq!(leds, [RED; 3]);
    }

    #[test]
    fn test_time_never_goes_backwards() {
        let mut program = LightProgram::activate_with_defaults(ProgramId::Radial, geometry(), 0).unwrap();

        program.set_time(Instant::from_millis(1000));
        assert_eq!(program.time(), Instant::from_millis(1000));

        program.set_time(Instant::from_millis(400));
        assert_eq!(program.time(), Instant::from_millis(1000));

        program.set_time(Instant::from_millis(1000));
        program.set_time(Instant::from_millis(1016));
        assert_eq!(program.time(), Instant::from_millis(1016));
        assert_eq!(program.frame_context().time, Instant::from_millis(1016));
        assert!((program.frame_context().elapsed_secs() - 1.016).abs() < 1e-6);
    }

    #[test]
    #[should_panic(expected = "frame buffer does not match geometry")]
    fn test_buffer_length_mismatch_panics() {
        let mut program = LightProgram::activate_with_defaults(ProgramId::Solid, geometry(), 0).unwrap();
        let mut leds = [BLACK; 2];
        program.draw_frame(&mut leds);
    }

    #[test]
    #[should_panic(expected = "frame buffer does not match geometry")]
    fn test_slot_rejects_short_buffer() {
        let mut slot = ProgramId::Radial.to_slot(0);
        let context = FrameContext {
            geometry: geometry(),
            time: Instant::from_millis(0),
        };
        let mut leds = [BLACK; 2];
        slot.draw_frame(&context, &mut leds);
    }

    #[test]
    #[should_panic(expected = "frame buffer does not match geometry")]
    fn test_slot_rejects_long_buffer() {
        let mut slot = ProgramId::Solid.to_slot(0);
        let context = FrameContext {
            geometry: geometry(),
            time: Instant::from_millis(0),
        };
        let mut leds = [BLACK; 4];
        slot.draw_frame(&context, &mut leds);
    }

    #[test]
    fn test_set_param() {
        let mut program = LightProgram::activate_with_defaults(ProgramId::Solid, geometry(), 0).unwrap();
        program.set_param("hue", ConfigValue::Number(0.5)).unwrap();

        let mut leds = [BLACK; 3];
        program.draw_frame(&mut leds);
        assert_eq!(leds, [CYAN; 3]);
        assert_eq!(program.config().number("hue"), Ok(0.5));
    }

    #[test]
    fn test_failed_update_keeps_config() {
        let mut program = LightProgram::activate_with_defaults(ProgramId::Solid, geometry(), 0).unwrap();
        program.set_param("saturation", ConfigValue::Number(0.0)).unwrap();
        let before = program.config().clone();

        assert_eq!(
            program.set_param("hue", ConfigValue::gradient("fire").unwrap()),
            Err(ProgramError::Config(ConfigError::TypeMismatch { name: "hue" }))
        );
        assert_eq!(
            program.set_param("unknown", ConfigValue::Number(1.0)),
            Err(ProgramError::Config(ConfigError::UnknownParam))
        );
        assert_eq!(
            program.update_config(Config::new()),
            Err(ProgramError::Config(ConfigError::MissingParam { name: "brightness" }))
        );
        assert_eq!(program.config(), &before);

        let mut leds = [BLACK; 3];
        program.draw_frame(&mut leds);
        assert_eq!(leds, [hsv_to_rgb(0.0, 0.0, 1.0); 3]);
    }

    #[test]
    fn test_solid_has_no_debug_helpers() {
        let program = LightProgram::activate_with_defaults(ProgramId::Solid, geometry(), 0).unwrap();
        assert!(program.debug_helpers().is_empty());
    }

    #[test]
    fn test_radial_reports_debug_helpers() {
        let program = LightProgram::activate_with_defaults(ProgramId::Radial, geometry(), 0).unwrap();
        assert_eq!(program.debug_helpers().len(), 2);
    }

    #[test]
    fn test_deactivate_returns_config() {
        let mut program = LightProgram::activate_with_defaults(ProgramId::Radial, geometry(), 0).unwrap();
        program.set_param("power", ConfigValue::Number(3.0)).unwrap();

        let config = program.deactivate();
        assert_eq!(config.number("power"), Ok(3.0));
    }

    #[test]
    fn test_from_slot_uses_slot_id() {
        let slot = ProgramSlot::Solid(Default::default());
        let schema = ProgramId::Solid.config_schema().unwrap();
        let config = Config::from_defaults(&schema).unwrap();

        let program = LightProgram::from_slot(slot, geometry(), config).unwrap();
        assert_eq!(program.id(), ProgramId::Solid);
        assert!(matches!(program.slot(), ProgramSlot::Solid(_)));
    }
}
