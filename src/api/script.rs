//! Provisioning script served to PowerShell clients on `GET /`.

/// Downloads the diagnose tool, runs it, then removes the temp files.
///
/// Served as-is, except that the lone `"` line which used to follow the
/// `Invoke-WebRequest` call is gone; PowerShell reads it as an unterminated
/// string and refuses to run the script.
pub const PROVISIONING_SCRIPT: &str = r#"$tempDir = [System.IO.Path]::GetTempPath()
$workDir = Join-Path $tempDir "diagnose_temp"
$zipPath = Join-Path $tempDir "diagnose.zip"

if (Test-Path $workDir) {
    Remove-Item -Recurse -Force $workDir
}

New-Item -ItemType Directory -Path $workDir | Out-Null

Invoke-WebRequest -Uri "https://nightly.link/CiiLu/diagnose/workflows/build/main/windows.zip" -OutFile $zipPath

Expand-Archive -Path $zipPath -DestinationPath $workDir -Force

$exePath = Join-Path $workDir "diagnose.exe"

& $exePath

Remove-Item -Recurse -Force $workDir
Remove-Item -Force $zipPath"#;

/// Returns true if the `User-Agent` marks a PowerShell client.
pub fn is_shell_client(user_agent: &str) -> bool {
    user_agent.to_lowercase().contains("powershell")
}
