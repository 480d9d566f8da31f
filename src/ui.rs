use crate::format::format_duration;

pub fn render_index(total_minutes: u64) -> String {
    let formatted = format_duration(total_minutes);
    INDEX_HTML.replace("{{MAJOR}}", &formatted.major)
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Zen Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Inter:wght@200;300;400;500&display=swap');

    :root {
      --bg: #0c0a09;
      --surface: #1c1917;
      --surface-2: #292524;
      --ink: #e7e5e4;
      --muted: #a8a29e;
      --accent: #fbbf24;
      --danger: #f87171;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Inter", "Helvetica Neue", sans-serif;
      overflow-x: hidden;
    }

    .glow {
      position: fixed;
      top: 50%;
      left: 50%;
      width: 600px;
      height: 600px;
      transform: translate(-50%, -50%);
      background: rgba(41, 37, 36, 0.35);
      filter: blur(120px);
      border-radius: 50%;
      pointer-events: none;
      z-index: 0;
    }

    #ripples {
      position: fixed;
      inset: 0;
      overflow: hidden;
      pointer-events: none;
      z-index: 0;
    }

    .ripple {
      position: absolute;
      top: 50%;
      left: 50%;
      width: 100vw;
      height: 100vw;
      margin-left: -50vw;
      margin-top: -50vw;
      border-radius: 50%;
      opacity: 0;
      animation: ripple 1.5s ease-out forwards;
    }

    @keyframes ripple {
      0% { transform: scale(0); opacity: 0.5; }
      100% { transform: scale(3); opacity: 0; }
    }

    nav {
      position: relative;
      z-index: 20;
      display: flex;
      justify-content: center;
      gap: 6px;
      padding: 18px 0 0;
    }

    .tab {
      appearance: none;
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 16px;
      font-size: 0.85rem;
      font-weight: 500;
      letter-spacing: 0.04em;
      color: var(--muted);
      cursor: pointer;
      transition: color 200ms ease, background 200ms ease;
    }

    .tab.active {
      background: var(--surface);
      color: var(--ink);
    }

    main {
      position: relative;
      z-index: 10;
      min-height: calc(100vh - 60px);
      display: flex;
      flex-direction: column;
    }

    section.view {
      flex: 1;
      display: none;
      flex-direction: column;
      align-items: center;
      justify-content: center;
      padding: 24px;
    }

    section.view.active {
      display: flex;
    }

    #odometer {
      display: flex;
      justify-content: center;
      align-items: baseline;
      font-size: clamp(4rem, 14vw, 8rem);
      font-weight: 200;
      letter-spacing: -0.04em;
      line-height: 1;
      margin: 0;
      padding: 0.1em 0;
      font-variant-numeric: tabular-nums;
      user-select: none;
    }

    .digit {
      display: inline-block;
      position: relative;
      height: 1em;
      width: 0.65em;
      overflow: hidden;
      text-align: center;
      vertical-align: top;
      -webkit-mask-image: linear-gradient(to bottom, transparent 0%, black 15%, black 85%, transparent 100%);
      mask-image: linear-gradient(to bottom, transparent 0%, black 15%, black 85%, transparent 100%);
    }

    .digit-strip {
      position: absolute;
      top: 0;
      left: 0;
      display: flex;
      flex-direction: column;
      align-items: center;
      width: 100%;
      transition: transform 1s cubic-bezier(0.2, 0.8, 0.2, 1);
    }

    .digit-strip span {
      height: 1em;
      display: flex;
      align-items: center;
      justify-content: center;
    }

    .unit {
      display: inline-block;
      color: var(--muted);
    }

    .total-label {
      margin-top: 4px;
      font-size: 1.05rem;
      color: rgba(168, 162, 158, 0.6);
      letter-spacing: 0.02em;
      text-transform: capitalize;
      user-select: none;
    }

    .logger {
      margin-top: 56px;
      display: flex;
      flex-direction: column;
      align-items: center;
      gap: 16px;
    }

    .presets {
      display: flex;
      flex-wrap: wrap;
      justify-content: center;
      gap: 10px;
    }

    button {
      font-family: inherit;
    }

    .preset,
    .pill {
      appearance: none;
      border: 1px solid rgba(255, 255, 255, 0.08);
      background: var(--surface);
      color: var(--ink);
      border-radius: 999px;
      padding: 10px 20px;
      font-size: 0.95rem;
      cursor: pointer;
      transition: background 150ms ease, transform 150ms ease;
    }

    .preset:hover,
    .pill:hover {
      background: var(--surface-2);
    }

    .preset:active,
    .pill:active {
      transform: scale(0.97);
    }

    .custom {
      display: flex;
      align-items: center;
      gap: 8px;
    }

    .custom input {
      width: 80px;
      background: var(--surface);
      border: 1px solid rgba(255, 255, 255, 0.08);
      border-radius: 10px;
      color: var(--ink);
      padding: 10px 12px;
      font-size: 0.95rem;
      text-align: center;
    }

    .custom input:focus {
      outline: 1px solid rgba(251, 191, 36, 0.4);
    }

    .fallback-forms {
      display: none;
    }

    #status {
      min-height: 1.2em;
      margin-top: 14px;
      font-size: 0.85rem;
      color: var(--muted);
    }

    #status[data-type="error"] {
      color: var(--danger);
    }

    #reset-button {
      position: fixed;
      top: 18px;
      right: 18px;
      z-index: 40;
      appearance: none;
      background: transparent;
      border: none;
      color: rgba(168, 162, 158, 0.3);
      font-size: 1.1rem;
      padding: 10px;
      cursor: pointer;
      transition: color 300ms ease;
    }

    #reset-button:hover {
      color: rgba(168, 162, 158, 0.85);
    }

    #undo-toast {
      position: fixed;
      top: 18px;
      left: 50%;
      transform: translate(-50%, -16px);
      z-index: 50;
      opacity: 0;
      pointer-events: none;
      transition: opacity 500ms ease, transform 500ms ease;
      appearance: none;
      display: flex;
      align-items: center;
      gap: 8px;
      padding: 10px 20px;
      background: var(--surface);
      border: 1px solid rgba(255, 255, 255, 0.08);
      border-radius: 999px;
      color: var(--ink);
      font-size: 0.9rem;
      cursor: pointer;
      box-shadow: 0 18px 40px rgba(0, 0, 0, 0.5);
    }

    #undo-toast.visible {
      opacity: 1;
      transform: translate(-50%, 0);
      pointer-events: auto;
    }

    #undo-toast .arrow {
      color: var(--accent);
    }

    #reset-modal {
      position: fixed;
      inset: 0;
      z-index: 100;
      display: none;
      align-items: center;
      justify-content: center;
      padding: 16px;
    }

    #reset-modal.open {
      display: flex;
    }

    #reset-backdrop {
      position: absolute;
      inset: 0;
      background: rgba(0, 0, 0, 0.6);
      backdrop-filter: blur(4px);
    }

    .modal-card {
      position: relative;
      background: var(--surface);
      border: 1px solid rgba(255, 255, 255, 0.1);
      border-radius: 18px;
      padding: 24px;
      max-width: 360px;
      width: 100%;
      box-shadow: 0 24px 60px rgba(0, 0, 0, 0.6);
    }

    .modal-card h3 {
      margin: 0 0 8px;
      font-size: 1.2rem;
      font-weight: 400;
    }

    .modal-card p {
      margin: 0 0 20px;
      color: var(--muted);
      font-size: 0.9rem;
      line-height: 1.5;
    }

    .modal-actions {
      display: flex;
      justify-content: flex-end;
      gap: 10px;
    }

    .modal-cancel {
      appearance: none;
      background: transparent;
      border: none;
      color: var(--muted);
      padding: 8px 14px;
      font-size: 0.9rem;
      cursor: pointer;
    }

    .modal-cancel:hover {
      color: var(--ink);
    }

    .modal-confirm {
      appearance: none;
      background: rgba(248, 113, 113, 0.1);
      border: 1px solid rgba(248, 113, 113, 0.2);
      border-radius: 10px;
      color: var(--danger);
      padding: 8px 14px;
      font-size: 0.9rem;
      cursor: pointer;
    }

    .modal-confirm:hover {
      background: rgba(248, 113, 113, 0.2);
    }

    #timer-display {
      font-size: clamp(3.5rem, 12vw, 6.5rem);
      font-weight: 200;
      letter-spacing: -0.03em;
      font-variant-numeric: tabular-nums;
      user-select: none;
    }

    .timer-controls {
      margin-top: 32px;
      display: flex;
      gap: 12px;
    }

    #timer-note {
      margin-top: 18px;
      min-height: 1.2em;
      font-size: 0.9rem;
      color: var(--muted);
    }

    #history {
      list-style: none;
      margin: 0;
      padding: 0;
      width: min(440px, 100%);
      max-height: 60vh;
      overflow-y: auto;
    }

    #history li {
      display: flex;
      justify-content: space-between;
      align-items: center;
      padding: 14px 6px;
      border-bottom: 1px solid rgba(255, 255, 255, 0.05);
      font-size: 0.92rem;
    }

    #history .when {
      color: var(--muted);
    }

    #history .amount.pos {
      color: var(--ink);
    }

    #history .amount.neg {
      color: var(--danger);
    }

    .empty-note {
      color: var(--muted);
      font-size: 0.9rem;
    }

    #globe-view {
      position: relative;
      justify-content: flex-start;
    }

    .globe-header {
      display: flex;
      flex-direction: column;
      align-items: center;
      gap: 6px;
      padding-top: 12px;
      user-select: none;
    }

    .live-badge {
      display: flex;
      align-items: center;
      gap: 8px;
      padding: 4px 12px;
      border-radius: 999px;
      background: rgba(28, 25, 23, 0.4);
      border: 1px solid rgba(255, 255, 255, 0.05);
      font-size: 10px;
      font-weight: 500;
      color: var(--muted);
      text-transform: uppercase;
      letter-spacing: 0.1em;
      margin-bottom: 14px;
    }

    .live-dot {
      width: 6px;
      height: 6px;
      border-radius: 50%;
      background: #22c55e;
      box-shadow: 0 0 8px rgba(34, 197, 94, 0.6);
      animation: pulse 2s ease-in-out infinite;
    }

    @keyframes pulse {
      50% { opacity: 0.4; }
    }

    #presence-count {
      font-size: clamp(2.2rem, 7vw, 3rem);
      font-weight: 200;
      letter-spacing: -0.03em;
      font-variant-numeric: tabular-nums;
    }

    #presence-caption {
      font-size: 0.85rem;
      color: rgba(168, 162, 158, 0.8);
      font-weight: 300;
    }

    #globe-stage {
      flex: 1;
      width: 100%;
      min-height: 340px;
      display: flex;
      align-items: center;
      justify-content: center;
      cursor: move;
      touch-action: none;
    }

    #globe-canvas {
      display: block;
    }

    @media (max-width: 600px) {
      .logger {
        margin-top: 40px;
      }
    }
  </style>
</head>
<body>
  <div class="glow"></div>
  <div id="ripples"></div>

  <button id="reset-button" type="button" aria-label="Reset progress">&#x2715;</button>

  <button id="undo-toast" type="button">
    <span class="arrow">&#x21BA;</span>
    <span id="undo-text">Undo</span>
  </button>

  <div id="reset-modal">
    <div id="reset-backdrop"></div>
    <div class="modal-card">
      <h3>Reset Progress?</h3>
      <p>This will permanently delete all your accumulated meditation time. This action cannot be undone.</p>
      <div class="modal-actions">
        <button class="modal-cancel" id="reset-cancel" type="button">Cancel</button>
        <button class="modal-confirm" id="reset-confirm" type="button">Reset</button>
      </div>
    </div>
  </div>

  <nav>
    <button class="tab active" type="button" data-view="practice">Practice</button>
    <button class="tab" type="button" data-view="timer">Timer</button>
    <button class="tab" type="button" data-view="journey">Journey</button>
    <button class="tab" type="button" data-view="globe">Globe</button>
  </nav>

  <main>
    <section class="view active" id="practice-view" data-view="practice">
      <h1 id="odometer">{{MAJOR}}</h1>
      <span class="total-label">accumulated</span>

      <div class="logger">
        <div class="presets">
          <button class="preset" type="button" data-minutes="5">+5m</button>
          <button class="preset" type="button" data-minutes="10">+10m</button>
          <button class="preset" type="button" data-minutes="15">+15m</button>
          <button class="preset" type="button" data-minutes="20">+20m</button>
        </div>
        <div class="custom">
          <input id="custom-minutes" type="number" min="1" step="1" value="10" aria-label="Minutes" />
          <button class="pill" id="custom-add" type="button">Add</button>
          <button class="pill" id="custom-remove" type="button">Remove</button>
        </div>
        <div class="fallback-forms">
          <form method="post" action="/log/add"><button type="submit">Add 10m</button></form>
          <form method="post" action="/log/remove"><button type="submit">Remove 10m</button></form>
        </div>
        <div id="status"></div>
      </div>
    </section>

    <section class="view" id="timer-view" data-view="timer">
      <div id="timer-display">00:00</div>
      <div class="timer-controls">
        <button class="pill" id="timer-toggle" type="button">Begin</button>
        <button class="pill" id="timer-finish" type="button">Finish</button>
      </div>
      <div id="timer-note">Finishing logs the whole minutes you sat.</div>
    </section>

    <section class="view" id="journey-view" data-view="journey">
      <ul id="history"></ul>
      <div class="empty-note" id="history-empty" hidden>No sessions yet. Sit for a while.</div>
    </section>

    <section class="view" id="globe-view" data-view="globe">
      <div class="globe-header">
        <div class="live-badge"><span class="live-dot"></span>Live Now</div>
        <div id="presence-count">1,243</div>
        <div id="presence-caption">minds meditating globally</div>
      </div>
      <div id="globe-stage">
        <canvas id="globe-canvas"></canvas>
      </div>
    </section>
  </main>

  <script>
    const odometerEl = document.getElementById('odometer');
    const statusEl = document.getElementById('status');
    const ripplesEl = document.getElementById('ripples');
    const undoToastEl = document.getElementById('undo-toast');
    const undoTextEl = document.getElementById('undo-text');
    const resetModalEl = document.getElementById('reset-modal');
    const historyEl = document.getElementById('history');
    const historyEmptyEl = document.getElementById('history-empty');
    const tabs = Array.from(document.querySelectorAll('.tab'));
    const views = Array.from(document.querySelectorAll('.view'));

    let activeView = 'practice';
    let undoHideTimer = null;

    const fetchJSON = async (url, options) => {
      const res = await fetch(url, options);
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.json();
    };

    const postJSON = (url, body) =>
      fetchJSON(url, {
        method: 'POST',
        headers: body ? { 'content-type': 'application/json' } : undefined,
        body: body ? JSON.stringify(body) : undefined
      });

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const renderOdometer = (text) => {
      const prev = odometerEl.dataset.value || '';
      if (prev === text) {
        return;
      }
      if (prev.length !== text.length) {
        odometerEl.innerHTML = '';
        for (const ch of text) {
          if (/[0-9]/.test(ch)) {
            const win = document.createElement('span');
            win.className = 'digit';
            const strip = document.createElement('span');
            strip.className = 'digit-strip';
            for (let i = 0; i < 10; i += 1) {
              const cell = document.createElement('span');
              cell.textContent = i;
              strip.appendChild(cell);
            }
            win.appendChild(strip);
            odometerEl.appendChild(win);
          } else {
            const unit = document.createElement('span');
            unit.className = 'unit';
            unit.textContent = ch;
            odometerEl.appendChild(unit);
          }
        }
      }
      Array.from(odometerEl.children).forEach((child, index) => {
        const ch = text[index];
        if (child.classList.contains('digit')) {
          child.firstChild.style.transform = `translateY(-${Number(ch) * 10}%)`;
        } else {
          child.textContent = ch;
        }
      });
      odometerEl.dataset.value = text;
    };

    const spawnRipple = (token) => {
      const el = document.createElement('div');
      el.className = 'ripple';
      el.style.background = `radial-gradient(circle, ${token.color_a}, ${token.color_b}, transparent 70%)`;
      ripplesEl.appendChild(el);
      setTimeout(() => el.remove(), 1500);
    };

    const hideUndo = () => {
      undoToastEl.classList.remove('visible');
      if (undoHideTimer) {
        clearTimeout(undoHideTimer);
        undoHideTimer = null;
      }
    };

    const showUndo = (lastDelta) => {
      undoTextEl.textContent =
        lastDelta > 0
          ? `Undo adding ${lastDelta}m`
          : lastDelta < 0
            ? `Undo removing ${Math.abs(lastDelta)}m`
            : 'Undo last change';
      undoToastEl.classList.add('visible');
      if (undoHideTimer) {
        clearTimeout(undoHideTimer);
      }
      undoHideTimer = setTimeout(hideUndo, 5000);
    };

    const applySummary = (summary) => {
      renderOdometer(summary.major);
      resetModalEl.classList.toggle('open', summary.reset_pending);
    };

    const logMinutes = async (minutes) => {
      const data = await postJSON('/api/session', { minutes });
      applySummary(data.summary);
      if (data.ripple) {
        spawnRipple(data.ripple);
      }
      showUndo(data.summary.last_delta);
      if (activeView === 'journey') {
        loadSessions().catch(() => {});
      }
      return data;
    };

    const loadSummary = async () => {
      const summary = await fetchJSON('/api/summary');
      applySummary(summary);
      if (summary.undo_available) {
        showUndo(summary.last_delta);
      }
    };

    const loadSessions = async () => {
      const data = await fetchJSON('/api/sessions');
      historyEl.innerHTML = '';
      historyEmptyEl.hidden = data.sessions.length > 0;
      for (const session of data.sessions) {
        const li = document.createElement('li');
        const when = document.createElement('span');
        when.className = 'when';
        when.textContent = new Date(session.date).toLocaleString();
        const amount = document.createElement('span');
        amount.className = session.duration < 0 ? 'amount neg' : 'amount pos';
        amount.textContent =
          (session.duration > 0 ? '+' : '−') + Math.abs(session.duration) + 'm';
        li.appendChild(when);
        li.appendChild(amount);
        historyEl.appendChild(li);
      }
    };

    // Tabs

    const setActiveView = (view) => {
      activeView = view;
      tabs.forEach((tab) => tab.classList.toggle('active', tab.dataset.view === view));
      views.forEach((section) => section.classList.toggle('active', section.dataset.view === view));
      if (view === 'journey') {
        loadSessions().catch((err) => setStatus(err.message, 'error'));
      }
      if (view === 'globe') {
        initGlobe();
      }
    };

    tabs.forEach((tab) => {
      tab.addEventListener('click', () => setActiveView(tab.dataset.view));
    });

    // Practice controls

    document.querySelectorAll('.preset').forEach((button) => {
      button.addEventListener('click', () => {
        logMinutes(Number(button.dataset.minutes)).catch((err) => setStatus(err.message, 'error'));
      });
    });

    const customInput = document.getElementById('custom-minutes');

    const customMinutes = () => {
      const value = Math.floor(Number(customInput.value));
      return Number.isFinite(value) && value > 0 ? value : 0;
    };

    document.getElementById('custom-add').addEventListener('click', () => {
      const minutes = customMinutes();
      if (minutes > 0) {
        logMinutes(minutes).catch((err) => setStatus(err.message, 'error'));
      }
    });

    document.getElementById('custom-remove').addEventListener('click', () => {
      const minutes = customMinutes();
      if (minutes > 0) {
        logMinutes(-minutes).catch((err) => setStatus(err.message, 'error'));
      }
    });

    undoToastEl.addEventListener('click', () => {
      postJSON('/api/undo')
        .then((summary) => {
          applySummary(summary);
          hideUndo();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    // Reset flow

    const closeResetModal = () => {
      postJSON('/api/reset/cancel')
        .then(applySummary)
        .catch((err) => setStatus(err.message, 'error'));
    };

    document.getElementById('reset-button').addEventListener('click', () => {
      postJSON('/api/reset/request')
        .then(applySummary)
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('reset-backdrop').addEventListener('click', closeResetModal);
    document.getElementById('reset-cancel').addEventListener('click', closeResetModal);

    document.getElementById('reset-confirm').addEventListener('click', () => {
      postJSON('/api/reset/confirm')
        .then((summary) => {
          applySummary(summary);
          hideUndo();
          if (activeView === 'journey') {
            loadSessions().catch(() => {});
          }
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    // Practice timer

    const timerDisplayEl = document.getElementById('timer-display');
    const timerToggleEl = document.getElementById('timer-toggle');
    const timerNoteEl = document.getElementById('timer-note');

    let timerStartedAt = null;
    let timerBankedMs = 0;
    let timerInterval = null;

    const timerElapsedMs = () =>
      timerBankedMs + (timerStartedAt ? Date.now() - timerStartedAt : 0);

    const renderTimer = () => {
      const totalSeconds = Math.floor(timerElapsedMs() / 1000);
      const minutes = Math.floor(totalSeconds / 60);
      const seconds = totalSeconds % 60;
      timerDisplayEl.textContent =
        String(minutes).padStart(2, '0') + ':' + String(seconds).padStart(2, '0');
    };

    timerToggleEl.addEventListener('click', () => {
      if (timerStartedAt) {
        timerBankedMs += Date.now() - timerStartedAt;
        timerStartedAt = null;
        clearInterval(timerInterval);
        timerInterval = null;
        timerToggleEl.textContent = 'Resume';
      } else {
        timerStartedAt = Date.now();
        timerInterval = setInterval(renderTimer, 500);
        timerToggleEl.textContent = 'Pause';
        timerNoteEl.textContent = 'Finishing logs the whole minutes you sat.';
      }
      renderTimer();
    });

    document.getElementById('timer-finish').addEventListener('click', () => {
      const minutes = Math.floor(timerElapsedMs() / 60000);
      timerStartedAt = null;
      timerBankedMs = 0;
      if (timerInterval) {
        clearInterval(timerInterval);
        timerInterval = null;
      }
      timerToggleEl.textContent = 'Begin';
      renderTimer();
      if (minutes > 0) {
        logMinutes(minutes)
          .then(() => {
            timerNoteEl.textContent = `Logged ${minutes}m.`;
          })
          .catch((err) => setStatus(err.message, 'error'));
      } else {
        timerNoteEl.textContent = 'Nothing to log yet.';
      }
    });

    // Decorative globe. Everything here is best-effort: a failed dataset
    // fetch just leaves the sphere empty.

    const COUNTRIES_URL =
      'https://vasturiano.github.io/react-globe.gl/example/datasets/ne_110m_admin_0_countries.geojson';
    const GRATICULES_URL =
      'https://raw.githubusercontent.com/nvkelso/natural-earth-vector/master/geojson/ne_110m_graticules_10.geojson';

    const CITIES = [
      { name: 'Seoul', lat: 37.5665, lng: 126.978, users: 42 },
      { name: 'Tokyo', lat: 35.6762, lng: 139.6503, users: 38 },
      { name: 'New York', lat: 40.7128, lng: -74.006, users: 112 },
      { name: 'London', lat: 51.5074, lng: -0.1278, users: 85 },
      { name: 'Paris', lat: 48.8566, lng: 2.3522, users: 71 },
      { name: 'Sydney', lat: -33.8688, lng: 151.2093, users: 29 },
      { name: 'Berlin', lat: 52.52, lng: 13.405, users: 44 },
      { name: 'Mumbai', lat: 19.076, lng: 72.8777, users: 56 },
      { name: 'São Paulo', lat: -23.5505, lng: -46.6333, users: 63 },
      { name: 'Cairo', lat: 30.0444, lng: 31.2357, users: 18 },
      { name: 'Los Angeles', lat: 34.0522, lng: -118.2437, users: 94 },
      { name: 'Bangkok', lat: 13.7563, lng: 100.5018, users: 33 },
      { name: 'Cape Town', lat: -33.9249, lng: 18.4241, users: 12 },
      { name: 'Moscow', lat: 55.7558, lng: 37.6173, users: 22 },
      { name: 'Dubai', lat: 25.2048, lng: 55.2708, users: 31 },
      { name: 'Singapore', lat: 1.3521, lng: 103.8198, users: 48 },
      { name: 'Toronto', lat: 43.6532, lng: -79.3832, users: 27 },
      { name: 'Buenos Aires', lat: -34.6037, lng: -58.3816, users: 19 },
      { name: 'Istanbul', lat: 41.0082, lng: 28.9784, users: 35 },
      { name: 'Lagos', lat: 6.5244, lng: 3.3792, users: 14 }
    ];

    let globe = null;

    const extractLines = (geo) => {
      const lines = [];
      for (const feature of geo.features || []) {
        const geometry = feature.geometry;
        if (!geometry) {
          continue;
        }
        if (geometry.type === 'Polygon') {
          lines.push(...geometry.coordinates);
        } else if (geometry.type === 'MultiPolygon') {
          for (const polygon of geometry.coordinates) {
            lines.push(...polygon);
          }
        } else if (geometry.type === 'LineString') {
          lines.push(geometry.coordinates);
        } else if (geometry.type === 'MultiLineString') {
          lines.push(...geometry.coordinates);
        }
      }
      return lines;
    };

    const initGlobe = () => {
      if (globe) {
        return;
      }
      const canvas = document.getElementById('globe-canvas');
      globe = {
        canvas,
        ctx: canvas.getContext('2d'),
        yaw: 0,
        auto: true,
        resumeAt: 0,
        countries: [],
        graticules: [],
        selected: null,
        revertAt: 0,
        globalUsers: 1243,
        lastShown: ''
      };

      fetch(COUNTRIES_URL)
        .then((res) => res.json())
        .then((geo) => {
          globe.countries = extractLines(geo);
        })
        .catch(() => {});
      fetch(GRATICULES_URL)
        .then((res) => res.json())
        .then((geo) => {
          globe.graticules = extractLines(geo);
        })
        .catch(() => {});

      setInterval(() => {
        globe.globalUsers += Math.floor(Math.random() * 5) - 2;
      }, 4000);

      const stage = document.getElementById('globe-stage');
      const pauseRotation = () => {
        globe.auto = false;
        globe.resumeAt = Date.now() + 2000;
      };

      stage.addEventListener('pointerdown', (event) => {
        pauseRotation();
        const rect = canvas.getBoundingClientRect();
        const px = event.clientX - rect.left;
        const py = event.clientY - rect.top;
        for (const city of CITIES) {
          const point = project(city.lat, city.lng);
          if (point.front && Math.hypot(point.x - px, point.y - py) < 16) {
            globe.selected = city;
            globe.revertAt = Date.now() + 5000;
            break;
          }
        }
      });
      stage.addEventListener('pointerup', pauseRotation);

      requestAnimationFrame(drawGlobe);
    };

    const project = (lat, lng) => {
      const radius = Math.min(globe.canvas.width, globe.canvas.height) / 2 - 10;
      const cx = globe.canvas.width / 2;
      const cy = globe.canvas.height / 2;
      const phi = (lat * Math.PI) / 180;
      const lam = ((lng + globe.yaw) * Math.PI) / 180;
      const x = Math.cos(phi) * Math.sin(lam);
      const y = Math.sin(phi);
      const z = Math.cos(phi) * Math.cos(lam);
      return { x: cx + x * radius, y: cy - y * radius, front: z > 0 };
    };

    const strokeLines = (lines, style) => {
      globe.ctx.strokeStyle = style;
      globe.ctx.lineWidth = 0.7;
      for (const line of lines) {
        globe.ctx.beginPath();
        let down = false;
        for (const [lng, lat] of line) {
          const point = project(lat, lng);
          if (!point.front) {
            down = false;
            continue;
          }
          if (down) {
            globe.ctx.lineTo(point.x, point.y);
          } else {
            globe.ctx.moveTo(point.x, point.y);
            down = true;
          }
        }
        globe.ctx.stroke();
      }
    };

    const drawGlobe = () => {
      requestAnimationFrame(drawGlobe);
      if (activeView !== 'globe') {
        return;
      }

      const stage = document.getElementById('globe-stage');
      const size = Math.min(stage.clientWidth, stage.clientHeight);
      if (globe.canvas.width !== size) {
        globe.canvas.width = size;
        globe.canvas.height = size;
      }

      if (!globe.auto && Date.now() > globe.resumeAt) {
        globe.auto = true;
      }
      if (globe.auto) {
        globe.yaw = (globe.yaw + 0.05) % 360;
      }
      if (globe.selected && Date.now() > globe.revertAt) {
        globe.selected = null;
      }

      const ctx = globe.ctx;
      ctx.clearRect(0, 0, globe.canvas.width, globe.canvas.height);

      const radius = Math.min(globe.canvas.width, globe.canvas.height) / 2 - 10;
      ctx.beginPath();
      ctx.arc(globe.canvas.width / 2, globe.canvas.height / 2, radius, 0, Math.PI * 2);
      ctx.strokeStyle = 'rgba(255, 255, 255, 0.08)';
      ctx.lineWidth = 1;
      ctx.stroke();

      strokeLines(globe.graticules, 'rgba(255, 255, 255, 0.12)');
      strokeLines(globe.countries, 'rgba(255, 255, 255, 0.45)');

      for (const city of CITIES) {
        const point = project(city.lat, city.lng);
        if (!point.front) {
          continue;
        }
        ctx.beginPath();
        ctx.arc(point.x, point.y, 3, 0, Math.PI * 2);
        ctx.fillStyle = 'white';
        ctx.shadowColor = 'rgba(255, 255, 255, 0.9)';
        ctx.shadowBlur = 8;
        ctx.fill();
        ctx.shadowBlur = 0;
        if (globe.selected === city) {
          ctx.beginPath();
          ctx.arc(point.x, point.y, 9, 0, Math.PI * 2);
          ctx.strokeStyle = 'rgba(255, 255, 255, 0.5)';
          ctx.stroke();
        }
      }

      const count = globe.selected ? globe.selected.users : globe.globalUsers;
      const caption = globe.selected
        ? `minds in ${globe.selected.name}`
        : 'minds meditating globally';
      const shown = count + '|' + caption;
      if (shown !== globe.lastShown) {
        document.getElementById('presence-count').textContent = count.toLocaleString('en-US');
        document.getElementById('presence-caption').textContent = caption;
        globe.lastShown = shown;
      }
    };

    loadSummary().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_interpolates_formatted_total() {
        let page = render_index(125);
        assert!(page.contains("02h 05m"));
        assert!(!page.contains("{{MAJOR}}"));
    }
}
