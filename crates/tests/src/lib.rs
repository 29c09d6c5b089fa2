#[cfg(test)]
mod common;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod navigation_tests;

#[cfg(test)]
mod access_tests;

#[cfg(test)]
mod dashboard_tests;

#[cfg(test)]
mod review_flow_tests;

#[cfg(test)]
mod report_tests;

#[cfg(test)]
mod settings_tests;

#[cfg(test)]
mod failure_tests;
