//! Tunable program parameters
//!
//! A [`ConfigSchema`] declares which parameters a program accepts, with their
//! bounds and defaults. It is descriptive only: enforcing bounds is the job of
//! whoever resolves user input into a [`Config`].
//!
//! Programs build their schema by composition: start from [`base_schema`] and
//! pass it through [`extend_schema`] with their own entries. Entries with an
//! existing name replace the parent's definition in place.

use heapless::{LinearMap, String};

use crate::error::{ConfigError, SchemaError};

/// Maximum number of parameters in a schema (and values in a config)
pub const MAX_PARAMS: usize = 16;

/// Maximum length of a gradient value
pub const MAX_GRADIENT_LEN: usize = 32;

/// Universal brightness parameter, applied by the host after rendering
pub const PARAM_BRIGHTNESS: &str = "brightness";

const BASE_PARAMS: [(&str, ParamSpec); 1] = [(
    PARAM_BRIGHTNESS,
    ParamSpec::number(0.0, 1.0, 0.01, 1.0),
)];

/// Kind of value a parameter holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Number,
    Gradient,
}

impl ValueType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Gradient => "gradient",
        }
    }
}

/// Bounded numeric parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberParam {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub default: f32,
}

impl NumberParam {
    pub const fn new(min: f32, max: f32, step: f32, default: f32) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }

    /// Check if the value is within the declared bounds
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value into the declared bounds, `NaN` becomes the default
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.default;
        }
        value.max(self.min).min(self.max)
    }
}

/// Color ramp parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientParam {
    pub default: &'static str,
}

/// Declaration of a single parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamSpec {
    Number(NumberParam),
    Gradient(GradientParam),
}

impl ParamSpec {
    pub const fn number(min: f32, max: f32, step: f32, default: f32) -> Self {
        Self::Number(NumberParam::new(min, max, step, default))
    }

    pub const fn gradient(default: &'static str) -> Self {
        Self::Gradient(GradientParam { default })
    }

    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Number(_) => ValueType::Number,
            Self::Gradient(_) => ValueType::Gradient,
        }
    }
}

/// Parameters declared by a program type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigSchema {
    params: LinearMap<&'static str, ParamSpec, MAX_PARAMS>,
}

impl ConfigSchema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self {
            params: LinearMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamSpec> {
        self.params.get(name)
    }

    /// Numeric declaration of a parameter, if it is numeric
    pub fn number(&self, name: &str) -> Option<&NumberParam> {
        match self.get(name)? {
            ParamSpec::Number(param) => Some(param),
            ParamSpec::Gradient(_) => None,
        }
    }

    /// Static key for a parameter name
    pub fn key(&self, name: &str) -> Option<&'static str> {
        self.params.keys().copied().find(|key| *key == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.params.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate declarations in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ParamSpec)> {
        self.params.iter().map(|(name, spec)| (*name, spec))
    }
}

/// Parameters shared by every program
pub fn base_schema() -> ConfigSchema {
    let mut params = LinearMap::new();
    for (name, spec) in BASE_PARAMS {
        // Fits: the base set is far below capacity
        params.insert(name, spec).ok();
    }
    ConfigSchema { params }
}

/// Extend a schema with additional or overriding entries
///
/// Existing names keep their position and take the new definition, new
/// names are appended. No entry is ever removed.
pub fn extend_schema(
    mut base: ConfigSchema,
    entries: &[(&'static str, ParamSpec)],
) -> Result<ConfigSchema, SchemaError> {
    for &(name, spec) in entries {
        base.params
            .insert(name, spec)
            .map_err(|_| SchemaError::CapacityExceeded { name })?;
    }
    Ok(base)
}

/// Resolved value of a parameter
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Number(f32),
    Gradient(String<MAX_GRADIENT_LEN>),
}

impl ConfigValue {
    /// Create a gradient value, `None` if the name is too long
    pub fn gradient(value: &str) -> Option<Self> {
        let mut gradient = String::new();
        gradient.push_str(value).ok()?;
        Some(Self::Gradient(gradient))
    }

    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Number(_) => ValueType::Number,
            Self::Gradient(_) => ValueType::Gradient,
        }
    }

    pub const fn as_number(&self) -> Option<f32> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Gradient(_) => None,
        }
    }

    pub fn as_gradient(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Gradient(value) => Some(value.as_str()),
        }
    }
}

/// Concrete parameter values of a running program
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    values: LinearMap<&'static str, ConfigValue, MAX_PARAMS>,
}

impl Config {
    /// Create an empty config
    pub fn new() -> Self {
        Self {
            values: LinearMap::new(),
        }
    }

    /// Config holding the default of every declared parameter
    pub fn from_defaults(schema: &ConfigSchema) -> Result<Self, ConfigError> {
        let mut config = Self::new();
        for (name, spec) in schema.iter() {
            let value = match spec {
                ParamSpec::Number(param) => ConfigValue::Number(param.default),
                ParamSpec::Gradient(param) => ConfigValue::gradient(param.default)
                    .ok_or(ConfigError::GradientTooLong { name })?,
            };
            config.insert(name, value)?;
        }
        Ok(config)
    }

    pub fn get(&self, name: &str) -> Option<&ConfigValue> {
        self.values.get(name)
    }

    /// Numeric value of a parameter
    pub fn number(&self, name: &'static str) -> Result<f32, ConfigError> {
        self.get(name)
            .ok_or(ConfigError::MissingParam { name })?
            .as_number()
            .ok_or(ConfigError::TypeMismatch { name })
    }

    /// Gradient value of a parameter
    pub fn gradient(&self, name: &'static str) -> Result<&str, ConfigError> {
        self.get(name)
            .ok_or(ConfigError::MissingParam { name })?
            .as_gradient()
            .ok_or(ConfigError::TypeMismatch { name })
    }

    /// Insert a value without consulting any schema
    ///
    /// Returns the replaced value, if any.
    pub fn insert(
        &mut self,
        name: &'static str,
        value: ConfigValue,
    ) -> Result<Option<ConfigValue>, ConfigError> {
        self.values
            .insert(name, value)
            .map_err(|_| ConfigError::CapacityExceeded { name })
    }

    /// Set a declared parameter
    ///
    /// The name must exist in `schema` and the value type must match the
    /// declaration. Numeric bounds are not checked.
    pub fn set(
        &mut self,
        schema: &ConfigSchema,
        name: &str,
        value: ConfigValue,
    ) -> Result<(), ConfigError> {
        let key = schema.key(name).ok_or(ConfigError::UnknownParam)?;
        let declared = schema
            .get(key)
            .map(ParamSpec::value_type)
            .ok_or(ConfigError::UnknownParam)?;
        if declared != value.value_type() {
            return Err(ConfigError::TypeMismatch { name: key });
        }
        self.insert(key, value)?;
        Ok(())
    }

    pub fn set_number(
        &mut self,
        schema: &ConfigSchema,
        name: &str,
        value: f32,
    ) -> Result<(), ConfigError> {
        self.set(schema, name, ConfigValue::Number(value))
    }

    pub fn set_gradient(
        &mut self,
        schema: &ConfigSchema,
        name: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let key = schema.key(name).ok_or(ConfigError::UnknownParam)?;
        let value =
            ConfigValue::gradient(value).ok_or(ConfigError::GradientTooLong { name: key })?;
        self.set(schema, key, value)
    }

    /// Check that every declared parameter has a value of the declared type
    /// and that no undeclared value is present
    pub fn validate(&self, schema: &ConfigSchema) -> Result<(), ConfigError> {
        for (name, spec) in schema.iter() {
            let value = self.get(name).ok_or(ConfigError::MissingParam { name })?;
            if value.value_type() != spec.value_type() {
                return Err(ConfigError::TypeMismatch { name });
            }
        }
        if self.values.keys().any(|name| !schema.contains(name)) {
            return Err(ConfigError::UnknownParam);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate values in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ConfigValue)> {
        self.values.iter().map(|(name, value)| (*name, value))
    }
}
