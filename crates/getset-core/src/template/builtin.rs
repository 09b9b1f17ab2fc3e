//! Built-in templates

use std::fmt;

use super::Template;
use crate::naming::NamingStyle;

const PSR2_GETTER: &str = r"
    /**
     * @return {{type}}
     */
    public function {{getterPrefix}}{{normalizedName}}()
    {
        return $this->{{name}};
    }
";

const PSR2_SETTER: &str = r"
    /**
     * @param {{type}} ${{name}}
     *
     * @return self
     */
    public function {{setterPrefix}}{{normalizedName}}({{typeHint}} ${{name}})
    {
        $this->{{name}} = ${{name}};

        return $this;
    }
";

const CAMEL_CASE_GETTER: &str = r"
    /**
     * Gets the {{description}}.
     *
     * @return {{type}}
     */
    public function {{getterPrefix}}{{normalizedName}}()
    {
        return $this->{{name}};
    }
";

const CAMEL_CASE_SETTER: &str = r"
    /**
     * Sets the {{description}}.
     *
     * @param {{type}} ${{param}} the {{humanName}}
     *
     * @return void
     */
    {{visibility}} function {{visibilityPrefix}}{{setterPrefix}}{{normalizedName}}({{typeHint}} ${{param}})
    {
        $this->{{name}} = ${{param}};
    }
";

const CAMEL_CASE_FLUENT_SETTER: &str = r"
    /**
     * Sets the {{description}}.
     *
     * @param {{type}} ${{param}} the {{humanName}}
     *
     * @return self
     */
    {{visibility}} function {{visibilityPrefix}}{{setterPrefix}}{{normalizedName}}({{typeHint}} ${{param}})
    {
        $this->{{name}} = ${{param}};

        return $this;
    }
";

const SNAKE_CASE_GETTER: &str = r"
    /**
     * Gets the {{description}}.
     *
     * @return {{type}}
     */
    public function {{getterPrefix}}_{{normalizedName}}()
    {
        return $this->{{name}};
    }
";

const SNAKE_CASE_SETTER: &str = r"
    /**
     * Sets the {{description}}.
     *
     * @param {{type}} ${{param}} the {{name}}
     *
     * @return void
     */
    {{visibility}} function {{visibilityPrefix}}{{setterPrefix}}_{{normalizedName}}({{typeHint}} ${{param}})
    {
        $this->{{name}} = ${{param}};
    }
";

const SNAKE_CASE_FLUENT_SETTER: &str = r"
    /**
     * Sets the {{description}}.
     *
     * @param {{type}} ${{param}} the {{name}}
     *
     * @return self
     */
    {{visibility}} function {{visibilityPrefix}}{{setterPrefix}}_{{normalizedName}}({{typeHint}} ${{param}})
    {
        $this->{{name}} = ${{param}};

        return $this;
    }
";

/// The templates shipped with getset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinTemplate {
    /// Minimal docblocks, `set` without visibility prefix, fluent setter
    Psr2,
    CamelCase,
    /// CamelCase with a chainable setter returning `$this`
    CamelCaseFluent,
    SnakeCase,
    /// SnakeCase with a chainable setter returning `$this`
    SnakeCaseFluent,
}

impl BuiltinTemplate {
    /// Every built-in, in registration order
    pub const ALL: [BuiltinTemplate; 5] = [
        Self::Psr2,
        Self::CamelCase,
        Self::CamelCaseFluent,
        Self::SnakeCase,
        Self::SnakeCaseFluent,
    ];

    /// Registry key
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Psr2 => "PSR2",
            Self::CamelCase => "CamelCase",
            Self::CamelCaseFluent => "CamelCaseFluent",
            Self::SnakeCase => "SnakeCase",
            Self::SnakeCaseFluent => "SnakeCaseFluent",
        }
    }

    /// Look up a built-in by registry key
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }

    #[must_use]
    pub fn style(&self) -> NamingStyle {
        match self {
            Self::Psr2 | Self::CamelCase | Self::CamelCaseFluent => NamingStyle::CamelCase,
            Self::SnakeCase | Self::SnakeCaseFluent => NamingStyle::SnakeCase,
        }
    }

    /// Whether the setter returns the owning instance
    #[must_use]
    pub fn is_fluent(&self) -> bool {
        matches!(
            self,
            Self::Psr2 | Self::CamelCaseFluent | Self::SnakeCaseFluent
        )
    }

    /// Build the template
    #[must_use]
    pub fn template(&self) -> Template {
        let (getter, setter) = match self {
            Self::Psr2 => (PSR2_GETTER, PSR2_SETTER),
            Self::CamelCase => (CAMEL_CASE_GETTER, CAMEL_CASE_SETTER),
            Self::CamelCaseFluent => (CAMEL_CASE_GETTER, CAMEL_CASE_FLUENT_SETTER),
            Self::SnakeCase => (SNAKE_CASE_GETTER, SNAKE_CASE_SETTER),
            Self::SnakeCaseFluent => (SNAKE_CASE_GETTER, SNAKE_CASE_FLUENT_SETTER),
        };

        Template::new(self.name(), self.style(), getter, setter)
            .with_private_setter_prefix(*self != Self::Psr2)
    }
}

impl fmt::Display for BuiltinTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
