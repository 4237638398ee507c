use regex::Regex;

use crate::navigation::SharedHook;
use crate::pattern::{CompiledPattern, PatternAst, PatternResult, WILDCARD, compile_template};

#[derive(Debug, Clone)]
pub struct RouteTemplate<V> {
    pub path: String,
    pub name: Option<String>,
    pub redirect: Option<String>,
    pub view: Option<V>,
    pub hooks: Vec<SharedHook<V>>,
    pub handler: Option<SharedHook<V>>,
}

impl<V> RouteTemplate<V> {
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self {
            path: path.into(),
            name: None,
            redirect: None,
            view: None,
            hooks: Vec::new(),
            handler: None,
        }
    }

    pub fn wildcard() -> Self {
        Self::new(WILDCARD)
    }

    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn redirect<S: Into<String>>(mut self, target: S) -> Self {
        self.redirect = Some(target.into());
        self
    }

    pub fn view(mut self, view: V) -> Self {
        self.view = Some(view);
        self
    }

    pub fn hook(mut self, hook: SharedHook<V>) -> Self {
        self.hooks.push(hook);
        self
    }

    pub fn handler(mut self, handler: SharedHook<V>) -> Self {
        self.handler = Some(handler);
        self
    }
}

#[derive(Debug)]
pub struct CompiledRoute<V> {
    compiled: CompiledPattern,
    name: Option<String>,
    redirect: Option<String>,
    view: Option<V>,
    hooks: Vec<SharedHook<V>>,
    handler: Option<SharedHook<V>>,
}

impl<V> CompiledRoute<V> {
    pub fn compile(template: RouteTemplate<V>, case_sensitive: bool) -> PatternResult<Self> {
        let compiled = compile_template(&template.path, case_sensitive)?;
        Ok(Self {
            compiled,
            name: template.name,
            redirect: template.redirect,
            view: template.view,
            hooks: template.hooks,
            handler: template.handler,
        })
    }

    pub fn path(&self) -> &str {
        &self.compiled.template
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn redirect(&self) -> Option<&str> {
        self.redirect.as_deref()
    }

    pub fn view(&self) -> Option<&V> {
        self.view.as_ref()
    }

    pub fn hooks(&self) -> &[SharedHook<V>] {
        &self.hooks
    }

    pub fn handler(&self) -> Option<&SharedHook<V>> {
        self.handler.as_ref()
    }

    pub fn is_wildcard(&self) -> bool {
        self.compiled.is_wildcard()
    }

    pub fn ast(&self) -> &PatternAst {
        &self.compiled.ast
    }

    pub fn pattern(&self) -> Option<&Regex> {
        self.compiled.pattern.as_ref()
    }

    pub fn pattern_source(&self) -> &str {
        &self.compiled.pattern_source
    }

    pub fn dispatch_fragment(&self) -> &str {
        &self.compiled.dispatch_fragment
    }

    pub fn dispatch_groups(&self) -> usize {
        self.compiled.dispatch_groups
    }

    pub fn param_names(&self) -> &[String] {
        &self.compiled.param_names
    }
}
