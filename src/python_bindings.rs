use numpy::PyReadonlyArray1;
use pyo3::prelude::*;

use crate::core::PairSearch;
use crate::hashed::HashedPair;

#[pyfunction]
fn two_sum(values: PyReadonlyArray1<'_, i64>, target: i64) -> PyResult<Option<(usize, usize)>> {
    let values = values.as_slice()?;
    Ok(HashedPair::find(values, target).map(|pair| pair.as_tuple()))
}

#[pyfunction]
fn binary_search(values: PyReadonlyArray1<'_, i64>, target: i64) -> PyResult<isize> {
    Ok(crate::sorted::search(values.as_slice()?, target))
}

#[pyfunction]
fn search_rotated(values: PyReadonlyArray1<'_, i64>, target: i64) -> PyResult<isize> {
    Ok(crate::rotated::search_rotated(values.as_slice()?, target))
}

#[pyfunction]
fn add_binary(a: &str, b: &str) -> String {
    crate::digits::add_binary(a, b)
}

#[pymodule]
fn intseek_py(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(two_sum, m)?)?;
    m.add_function(wrap_pyfunction!(binary_search, m)?)?;
    m.add_function(wrap_pyfunction!(search_rotated, m)?)?;
    m.add_function(wrap_pyfunction!(add_binary, m)?)?;
    Ok(())
}
