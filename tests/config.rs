mod tests {
    use myrtio_light_programs::{
        Program, RadialProgram, SolidProgram,
        config::{
            Config, ConfigSchema, ConfigValue, NumberParam, PARAM_BRIGHTNESS, ParamSpec,
            ValueType, base_schema, extend_schema,
        },
        error::{ConfigError, SchemaError},
    };

    const FILLER_NAMES: [&str; 16] = [
        "p0", "p1", "p2", "p3", "p4", "p5", "p6", "p7", "p8", "p9", "p10", "p11", "p12", "p13",
        "p14", "p15",
    ];

    #[test]
    fn test_base_schema() {
        let schema = base_schema();
        assert_eq!(schema.len(), 1);
        assert_eq!(
            schema.number(PARAM_BRIGHTNESS),
            Some(&NumberParam::new(0.0, 1.0, 0.01, 1.0))
        );
    }

    #[test]
    fn test_extend_schema_appends_and_overrides() {
        let schema = extend_schema(
            base_schema(),
            &[
                ("speed", ParamSpec::number(-1.0, 1.0, 0.1, 0.0)),
                (PARAM_BRIGHTNESS, ParamSpec::number(0.0, 0.5, 0.1, 0.5)),
            ],
        )
        .unwrap();

        let names: Vec<&str> = schema.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["brightness", "speed"]);
        assert_eq!(schema.number(PARAM_BRIGHTNESS).unwrap().max, 0.5);
        assert_eq!(schema.number("speed").unwrap().min, -1.0);
    }

    #[test]
    fn test_extend_schema_capacity() {
        let entries: Vec<(&'static str, ParamSpec)> = FILLER_NAMES
            .iter()
            .map(|name| (*name, ParamSpec::number(0.0, 1.0, 0.1, 0.0)))
            .collect();

        assert_eq!(
            extend_schema(base_schema(), &entries),
            Err(SchemaError::CapacityExceeded { name: "p15" })
        );
        assert!(extend_schema(ConfigSchema::new(), &entries).is_ok());
    }

    #[test]
    fn test_radial_schema() {
        let schema = RadialProgram::config_schema().unwrap();
        assert_eq!(schema, RadialProgram::config_schema().unwrap());
        assert_eq!(schema.len(), 7);
        assert!(schema.contains(PARAM_BRIGHTNESS));

        assert_eq!(
            schema.number("escala"),
            Some(&NumberParam::new(0.1, 100.0, 0.1, 10.0))
        );
        assert_eq!(
            schema.number("velocidad"),
            Some(&NumberParam::new(-50.0, 50.0, 0.1, -5.0))
        );
        assert_eq!(
            schema.number("centerY"),
            Some(&NumberParam::new(-50.0, 50.0, 0.1, 0.0))
        );
        assert_eq!(
            schema.number("centerX"),
            Some(&NumberParam::new(-100.0, 100.0, 0.1, 0.0))
        );
        assert_eq!(
            schema.number("power"),
            Some(&NumberParam::new(0.0, 10.0, 0.1, 1.0))
        );
        assert_eq!(schema.get("colorMap"), Some(&ParamSpec::gradient("")));
        assert_eq!(
            schema.get("colorMap").map(ParamSpec::value_type),
            Some(ValueType::Gradient)
        );
    }

    #[test]
    fn test_solid_schema_keeps_base() {
        let schema = SolidProgram::config_schema().unwrap();
        assert_eq!(schema.len(), 3);
        assert!(schema.contains(PARAM_BRIGHTNESS));
        assert!(schema.contains("hue"));
        assert!(schema.contains("saturation"));
    }

    #[test]
    fn test_config_from_defaults() {
        let schema = RadialProgram::config_schema().unwrap();
        let config = Config::from_defaults(&schema).unwrap();

        assert_eq!(config.len(), schema.len());
        assert_eq!(config.number("escala"), Ok(10.0));
        assert_eq!(config.number("velocidad"), Ok(-5.0));
        assert_eq!(config.number(PARAM_BRIGHTNESS), Ok(1.0));
        assert_eq!(config.gradient("colorMap"), Ok(""));
        assert_eq!(config.validate(&schema), Ok(()));
    }

    #[test]
    fn test_config_set() {
        let schema = RadialProgram::config_schema().unwrap();
        let mut config = Config::from_defaults(&schema).unwrap();

        config.set_number(&schema, "escala", 25.0).unwrap();
        assert_eq!(config.number("escala"), Ok(25.0));

        // Bounds are the resolver's concern
        config.set_number(&schema, "power", 99.0).unwrap();
        assert_eq!(config.number("power"), Ok(99.0));

        config.set_gradient(&schema, "colorMap", "fire").unwrap();
        assert_eq!(config.gradient("colorMap"), Ok("fire"));

        assert_eq!(
            config.set_number(&schema, "missing", 1.0),
            Err(ConfigError::UnknownParam)
        );
        assert_eq!(
            config.set(&schema, "escala", ConfigValue::gradient("fire").unwrap()),
            Err(ConfigError::TypeMismatch { name: "escala" })
        );
        assert_eq!(
            config.set_gradient(&schema, "colorMap", &"x".repeat(64)),
            Err(ConfigError::GradientTooLong { name: "colorMap" })
        );
        assert_eq!(config.gradient("colorMap"), Ok("fire"));
    }

    #[test]
    fn test_config_validate() {
        let schema = RadialProgram::config_schema().unwrap();

        let partial = Config::from_defaults(&base_schema()).unwrap();
        assert_eq!(
            partial.validate(&schema),
            Err(ConfigError::MissingParam { name: "escala" })
        );

        let mut wrong_type = Config::from_defaults(&schema).unwrap();
        wrong_type
            .insert("power", ConfigValue::gradient("").unwrap())
            .unwrap();
        assert_eq!(
            wrong_type.validate(&schema),
            Err(ConfigError::TypeMismatch { name: "power" })
        );

        let mut extra = Config::from_defaults(&schema).unwrap();
        extra.insert("extra", ConfigValue::Number(1.0)).unwrap();
        assert_eq!(extra.validate(&schema), Err(ConfigError::UnknownParam));
    }

    #[test]
    fn test_config_accessors() {
        let mut config = Config::new();
        assert!(config.is_empty());
        assert_eq!(
            config.number("escala"),
            Err(ConfigError::MissingParam { name: "escala" })
        );

        config.insert("colorMap", ConfigValue::gradient("ice").unwrap()).unwrap();
        assert_eq!(
            config.number("colorMap"),
            Err(ConfigError::TypeMismatch { name: "colorMap" })
        );
        assert_eq!(config.get("colorMap").and_then(ConfigValue::as_gradient), Some("ice"));
    }

    #[test]
    fn test_number_param_bounds() {
        let param = NumberParam::new(0.1, 100.0, 0.1, 10.0);
        assert!(param.contains(0.1));
        assert!(param.contains(100.0));
        assert!(!param.contains(0.0));
        assert_eq!(param.clamp(0.0), 0.1);
        assert_eq!(param.clamp(500.0), 100.0);
        assert_eq!(param.clamp(42.0), 42.0);
        assert_eq!(param.clamp(f32::NAN), 10.0);
    }
}
