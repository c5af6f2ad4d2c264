use std::f64::consts::PI;

/// The range of values a parameter slider can be set to.
///
/// The slider has `ticks` evenly spaced positions, the first at `min` and the last at `max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRange {
    /// The value at the first tick.
    pub min: f64,

    /// The value at the last tick.
    pub max: f64,

    /// The number of ticks.
    pub ticks: usize,
}

/// The default slider range, from `-10.0` to `10.0` in steps of `0.1`.
impl Default for SliderRange {
    fn default() -> SliderRange {
        SliderRange {
            min: -10.0,
            max: 10.0,
            ticks: 201,
        }
    }
}

impl SliderRange {
    /// Returns the value at the given tick, where tick `0` is `min`.
    pub fn value_at(&self, tick: usize) -> f64 {
        if self.ticks < 2 {
            return self.min;
        }

        let tick = tick.min(self.ticks - 1);
        self.min + (self.max - self.min) * tick as f64 / (self.ticks - 1) as f64
    }

    /// Returns the tick closest to the given value. Values outside of the range are clamped to the
    /// first or last tick.
    pub fn tick_of(&self, value: f64) -> usize {
        if self.ticks < 2 || self.max <= self.min || value.is_nan() {
            return 0;
        }

        let last = (self.ticks - 1) as f64;
        let position = (value - self.min) / (self.max - self.min) * last;
        position.round().clamp(0.0, last) as usize
    }
}

/// Options that control how the engine creates and samples functions.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineOptions {
    /// The name of the primary variable. Every function must depend on it.
    ///
    /// The default value is `"x"`.
    pub primary_variable: String,

    /// The value of the primary variable at which new functions and parameter values are checked
    /// before they are accepted. See [`is_defined_at`](crate::validator::is_defined_at).
    ///
    /// The default value is `π`.
    pub probe_point: f64,

    /// The first and last values of the primary variable at which the function is sampled.
    ///
    /// The default value is `(-π, π)`.
    pub sample_range: (f64, f64),

    /// The number of samples to take in [`sample_range`](Self::sample_range).
    ///
    /// The default value is `1024`.
    pub sample_count: usize,

    /// The range of values each parameter can be set to.
    ///
    /// The default value is `-10.0` to `10.0`, with `201` ticks.
    pub slider: SliderRange,

    /// The longest LaTeX string that is shown in the title. Longer strings are replaced with just
    /// `f(x)`.
    ///
    /// The default value is `150`.
    pub title_max_len: usize,

    /// The function that is active before any other function is set.
    ///
    /// The default value is `"sin(x)"`.
    pub initial_function: String,
}

/// The default options for the engine. Returns an [`EngineOptions`] with the following values:
///
/// - [`primary_variable`](EngineOptions::primary_variable): `"x"`
/// - [`probe_point`](EngineOptions::probe_point): `π`
/// - [`sample_range`](EngineOptions::sample_range): `(-π, π)`
/// - [`sample_count`](EngineOptions::sample_count): `1024`
/// - [`slider`](EngineOptions::slider): `-10.0` to `10.0`, with `201` ticks
/// - [`title_max_len`](EngineOptions::title_max_len): `150`
/// - [`initial_function`](EngineOptions::initial_function): `"sin(x)"`
impl Default for EngineOptions {
    fn default() -> EngineOptions {
        EngineOptions {
            primary_variable: "x".to_string(),
            probe_point: PI,
            sample_range: (-PI, PI),
            sample_count: 1024,
            slider: SliderRange::default(),
            title_max_len: 150,
            initial_function: "sin(x)".to_string(),
        }
    }
}

impl EngineOptions {
    /// Set the name of the primary variable. Returns an updated [`EngineOptions`] for chaining.
    pub fn primary_variable(mut self, primary_variable: impl Into<String>) -> Self {
        self.primary_variable = primary_variable.into();
        self
    }

    /// Set the probe point. Returns an updated [`EngineOptions`] for chaining.
    pub fn probe_point(mut self, probe_point: f64) -> Self {
        self.probe_point = probe_point;
        self
    }

    /// Set the first and last sample points. Returns an updated [`EngineOptions`] for chaining.
    pub fn sample_range(mut self, start: f64, end: f64) -> Self {
        self.sample_range = (start, end);
        self
    }

    /// Set the number of samples. Returns an updated [`EngineOptions`] for chaining.
    pub fn sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Set the range of the parameter sliders. Returns an updated [`EngineOptions`] for chaining.
    pub fn slider(mut self, min: f64, max: f64, ticks: usize) -> Self {
        self.slider = SliderRange { min, max, ticks };
        self
    }

    /// Set the longest LaTeX string shown in the title. Returns an updated [`EngineOptions`] for
    /// chaining.
    pub fn title_max_len(mut self, title_max_len: usize) -> Self {
        self.title_max_len = title_max_len;
        self
    }

    /// Set the initial function. Returns an updated [`EngineOptions`] for chaining.
    pub fn initial_function(mut self, initial_function: impl Into<String>) -> Self {
        self.initial_function = initial_function.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn slider_ticks() {
        let slider = SliderRange::default();
        assert_eq!(slider.value_at(0), -10.0);
        assert_eq!(slider.value_at(200), 10.0);
        assert_eq!(slider.value_at(100), 0.0);
        assert_float_absolute_eq!(slider.value_at(101), 0.1);
        assert_eq!(slider.value_at(1000), 10.0);
    }

    #[test]
    fn slider_positions() {
        let slider = SliderRange::default();
        assert_eq!(slider.tick_of(0.0), 100);
        assert_eq!(slider.tick_of(1.0), 110);
        assert_eq!(slider.tick_of(-10.0), 0);
        assert_eq!(slider.tick_of(0.04), 100);
        assert_eq!(slider.tick_of(25.0), 200);
        assert_eq!(slider.tick_of(-25.0), 0);
        assert_eq!(slider.tick_of(f64::NAN), 0);
    }

    #[test]
    fn chained_options() {
        let opts = EngineOptions::default()
            .primary_variable("t")
            .sample_range(0.0, 1.0)
            .sample_count(11)
            .slider(0.0, 1.0, 11);
        assert_eq!(opts.primary_variable, "t");
        assert_eq!(opts.sample_range, (0.0, 1.0));
        assert_eq!(opts.sample_count, 11);
        assert_float_absolute_eq!(opts.slider.value_at(3), 0.3);
        assert_eq!(opts.probe_point, PI);
        assert_eq!(opts.initial_function, "sin(x)");
    }
}
