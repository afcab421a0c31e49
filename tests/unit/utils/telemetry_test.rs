// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use serverload::utils::telemetry;

    #[test]
    fn test_telemetry_initialization_is_idempotent() {
        telemetry::init_telemetry();
        telemetry::init_telemetry();

        tracing::debug!("This is a debug message");
        tracing::info!(target_id = 7, value = "42%", "display updated");
    }
}
