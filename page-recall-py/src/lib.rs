//! Python bindings for the page-recall Rust library.
//!
//! Exposes page extraction to Python. Results are returned as plain dicts
//! with the same shape as the JSON serialization of `PageContent`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use page_recall::document::PageDocument;
use page_recall::extract::{ExtractorConfig, PageContent, PageExtractor};

fn build_config(
    min_content_ratio: Option<f64>,
    min_char_count: Option<usize>,
) -> PyResult<ExtractorConfig> {
    let mut config = ExtractorConfig::default();
    if let Some(ratio) = min_content_ratio {
        config = config.with_min_content_ratio(ratio);
    }
    if let Some(count) = min_char_count {
        let readability = config.readability.clone().with_min_char_count(count);
        config = config.with_readability(readability);
    }
    config
        .validate()
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(config)
}

fn page_to_py(py: Python<'_>, page: &PageContent) -> PyResult<PyObject> {
    let value = serde_json::to_value(page).map_err(|e| PyValueError::new_err(e.to_string()))?;
    json_to_py(py, &value)
}

/// Python wrapper for PageExtractor.
#[pyclass(name = "PageExtractor")]
pub struct PyPageExtractor {
    inner: PageExtractor,
}

#[pymethods]
impl PyPageExtractor {
    /// Creates an extractor.
    #[new]
    #[pyo3(signature = (min_content_ratio=None, min_char_count=None))]
    fn new(min_content_ratio: Option<f64>, min_char_count: Option<usize>) -> PyResult<Self> {
        let config = build_config(min_content_ratio, min_char_count)?;
        let inner =
            PageExtractor::from_config(&config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Creates an extractor from a JSON configuration string.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let config = ExtractorConfig::from_json(json).map_err(|e| PyValueError::new_err(e.to_string()))?;
        let inner =
            PageExtractor::from_config(&config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner })
    }

    #[getter]
    fn min_content_ratio(&self) -> f64 {
        self.inner.min_content_ratio()
    }

    /// Extracts a page and returns `{"metadata": {...}, "content": str}`.
    fn extract(&self, py: Python<'_>, html: &str, url: &str) -> PyResult<PyObject> {
        let page = py.allow_threads(|| self.inner.extract(PageDocument::parse(url, html)));
        page_to_py(py, &page)
    }

    fn __repr__(&self) -> String {
        format!("PageExtractor(min_content_ratio={})", self.inner.min_content_ratio())
    }
}

/// Extracts a page with a one-off extractor.
#[pyfunction]
#[pyo3(signature = (html, url, min_content_ratio=None, min_char_count=None))]
fn extract(
    py: Python<'_>,
    html: &str,
    url: &str,
    min_content_ratio: Option<f64>,
    min_char_count: Option<usize>,
) -> PyResult<PyObject> {
    let extractor = PyPageExtractor::new(min_content_ratio, min_char_count)?;
    extractor.extract(py, html, url)
}

/// Normalizes whitespace the way extracted content is normalized.
#[pyfunction]
fn normalize_whitespace(text: &str) -> String {
    page_recall::text::normalize_whitespace(text)
}

fn json_to_py(py: Python<'_>, value: &serde_json::Value) -> PyResult<PyObject> {
    Ok(match value {
        serde_json::Value::Null => py.None(),
        serde_json::Value::Bool(b) => b.into_py(py),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.into_py(py)
            } else if let Some(f) = n.as_f64() {
                f.into_py(py)
            } else {
                py.None()
            }
        }
        serde_json::Value::String(s) => s.into_py(py),
        serde_json::Value::Array(arr) => {
            let items = arr
                .iter()
                .map(|v| json_to_py(py, v))
                .collect::<PyResult<Vec<_>>>()?;
            PyList::new_bound(py, items).into_py(py)
        }
        serde_json::Value::Object(map) => {
            let dict = PyDict::new_bound(py);
            for (k, v) in map {
                dict.set_item(k, json_to_py(py, v)?)?;
            }
            dict.into_py(py)
        }
    })
}

/// The page-recall Python module.
#[pymodule]
fn page_recall_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPageExtractor>()?;
    m.add_function(wrap_pyfunction!(extract, m)?)?;
    m.add_function(wrap_pyfunction!(normalize_whitespace, m)?)?;

    m.add("__version__", "0.1.0")?;
    m.add("__rust_version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
