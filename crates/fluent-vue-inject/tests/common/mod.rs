#![allow(dead_code)] // Functions used by different test binaries appear unused per-binary

//! Shared test utilities for fluent-vue-inject integration tests.

use fluent_vue_inject::PluginContext;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Records everything the plugin reports to the host.
#[derive(Debug, Default)]
pub struct RecordingContext {
    pub watched: Vec<PathBuf>,
    pub warnings: Vec<String>,
}

impl PluginContext for RecordingContext {
    fn add_watch_file(&mut self, path: &Path) {
        self.watched.push(path.to_path_buf());
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}

/// A project with `src/` components and `src/ftl/<locale>/` resources.
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn base_dir(&self) -> PathBuf {
        self.dir.path().join("src")
    }

    pub fn ftl_dir(&self) -> PathBuf {
        self.dir.path().join("src").join("ftl")
    }

    /// Absolute id of a component under `src/`.
    pub fn component_id(&self, relative: &str) -> String {
        self.base_dir().join(relative).to_string_lossy().into_owned()
    }

    /// Writes `src/ftl/<locale>/<relative>.ftl`.
    pub fn write_ftl(&self, locale: &str, relative: &str, content: &str) -> PathBuf {
        let path = self.ftl_dir().join(locale).join(format!("{}.ftl", relative));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }
}

/// Output of vite-plugin-vue2 (trimmed).
pub const VUE2_OUTPUT: &str = r#"var render = function () {var _vm=this;var _h=_vm.$createElement;var _c=_vm._self._c||_h;return _c('div',[_vm._v(_vm._s(_vm.$t('hello-user', { userName: _vm.userName })))])};
var staticRenderFns = [];
render._withStripped = true;

const __vue2_script = {};
const __cssModules = {};
var __component__ = /*#__PURE__*/normalizeComponent(
  __vue2_script,
  render,
  staticRenderFns,
  false,
  __vue2_injectStyles,
  null,
  null,
  null
);

function __vue2_injectStyles (context) {
  for(let o in __cssModules){
    this[o] = __cssModules[o];
  }
}
__component__.options.__file = "src/components/external.vue";
var external = /*#__PURE__*/(function () { return __component__.exports })();

export default external;
"#;

/// Output of rollup-plugin-vue.
pub const ROLLUP_OUTPUT: &str = r#"import { toDisplayString, createElementVNode, openBlock, createElementBlock } from 'vue';

function render(_ctx, _cache) {
  return (openBlock(), createElementBlock("div", null, [
    createElementVNode("div", null, toDisplayString(_ctx.$t('hello-user', { userName: _ctx.userName })), 1 /* TEXT */)
  ]))
}

const script = {};

script.render = render;
script.__file = "src/components/external.vue";

export default script;
"#;

/// Output of rollup-plugin-vue in a production build.
pub const ROLLUP_PRODUCTION_OUTPUT: &str = r#"import { openBlock, createElementBlock } from 'vue';

function render(_ctx, _cache) {
  return (openBlock(), createElementBlock("div"))
}

const script = {};

script.render = render;

export default script;
"#;

/// Output of @vitejs/plugin-vue on the dev server.
pub const VITE_OUTPUT: &str = r#"import { defineComponent as _defineComponent } from 'vue'
const _sfc_main = /*#__PURE__*/_defineComponent({
  setup(__props, { expose }) {
    expose();
    const userName = 'John'
    return { userName }
  }
})
import { toDisplayString as _toDisplayString, openBlock as _openBlock, createElementBlock as _createElementBlock } from "vue"
function _sfc_render(_ctx, _cache, $props, $setup, $data, $options) {
  return (_openBlock(), _createElementBlock("div", null, _toDisplayString(_ctx.$t('hello-user', { userName: $setup.userName })), 1 /* TEXT */))
}
_sfc_main.render = _sfc_render
_sfc_main.__hmrId = "6dc1f5a3"
typeof __VUE_HMR_RUNTIME__ !== 'undefined' && __VUE_HMR_RUNTIME__.createRecord(_sfc_main.__hmrId, _sfc_main)
export default _sfc_main
"#;

/// Counts non-overlapping occurrences of `needle`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
