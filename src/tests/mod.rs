// Host-run tests for the compositor and UI stack


#[cfg(test)]
mod effects_tests;

#[cfg(test)]
mod screen_tests;
