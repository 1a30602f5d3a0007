//! HTML dashboard rendering with D3.js charts
//!
//! One self-contained page: the computed dashboard is embedded as a JSON
//! blob and every chart is drawn client-side from it. The same template
//! serves two roles - a static report written to disk, and the live page in
//! serve mode where the content-type filter refetches `/api/dashboard` and
//! redraws.

use crate::dashboard::Dashboard;
use std::io::{self, Write};

/// Render the dashboard page. `interactive` wires the filter control to the
/// serve-mode API; the static report renders the same control disabled.
pub fn render(dashboard: &Dashboard, interactive: bool) -> String {
    let json = serde_json::to_string(dashboard).unwrap_or_else(|_| "null".to_string());
    TEMPLATE
        .replace("/*__DATA__*/null", &json)
        .replace("__INTERACTIVE__", if interactive { "true" } else { "false" })
}

/// Write the static report variant.
pub fn write<W: Write>(writer: &mut W, dashboard: &Dashboard) -> io::Result<()> {
    writer.write_all(render(dashboard, false).as_bytes())
}

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Streamlens Catalog Dashboard</title>
    <script src="https://d3js.org/d3.v7.min.js"></script>
    <style>
        :root {
            --bg: #0d1117;
            --card: #161b22;
            --border: #30363d;
            --text: #e6edf3;
            --dim: #7d8590;
            --accent: #58a6ff;
            --movie: #3fb950;
            --show: #a371f7;
            --warn: #d29922;
            --neg: #f85149;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Noto Sans', Helvetica, Arial, sans-serif;
            background: var(--bg);
            color: var(--text);
            line-height: 1.5;
        }
        .container { max-width: 1600px; margin: 0 auto; padding: 2rem; }

        /* Header */
        .header {
            display: flex;
            align-items: center;
            justify-content: space-between;
            gap: 1rem;
            margin-bottom: 2rem;
            padding-bottom: 1rem;
            border-bottom: 1px solid var(--border);
        }
        .logo {
            font-size: 2.5rem;
            font-weight: 800;
            background: linear-gradient(135deg, var(--accent), #a371f7);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .subtitle { color: var(--dim); font-size: 1rem; }

        /* Filter */
        .filter {
            display: flex;
            align-items: center;
            gap: 1rem;
            background: var(--card);
            border: 1px solid var(--border);
            border-radius: 12px;
            padding: 0.75rem 1.25rem;
        }
        .filter-label { color: var(--dim); font-size: 0.875rem; text-transform: uppercase; letter-spacing: 0.05em; }
        .filter label { display: flex; align-items: center; gap: 0.4rem; cursor: pointer; }
        .filter input[disabled] + span { color: var(--dim); }

        /* Stats Row */
        .stats {
            display: grid;
            grid-template-columns: repeat(4, 1fr);
            gap: 1rem;
            margin-bottom: 2rem;
        }
        .stat {
            background: var(--card);
            border: 1px solid var(--border);
            border-radius: 12px;
            padding: 1.5rem;
            text-align: center;
        }
        .stat-value { font-size: 3rem; font-weight: 700; line-height: 1; }
        .stat-label { color: var(--dim); font-size: 0.875rem; text-transform: uppercase; letter-spacing: 0.05em; margin-top: 0.5rem; }
        .stat.titles .stat-value { color: var(--accent); }
        .stat.dropped .stat-value { color: var(--warn); }

        /* Charts Grid */
        .charts {
            display: grid;
            grid-template-columns: repeat(2, 1fr);
            gap: 1.5rem;
            margin-bottom: 2rem;
        }
        .chart-card {
            background: var(--card);
            border: 1px solid var(--border);
            border-radius: 12px;
            padding: 1.5rem;
        }
        .chart-card.wide { grid-column: span 2; }
        .chart-title {
            font-size: 1rem;
            font-weight: 600;
            margin-bottom: 1rem;
            color: var(--dim);
        }
        .cluster-terms { color: var(--dim); font-size: 0.8rem; margin-top: 0.5rem; }

        .tooltip {
            position: absolute;
            background: #1c2128;
            border: 1px solid var(--border);
            border-radius: 8px;
            padding: 0.5rem 0.75rem;
            font-size: 0.8rem;
            pointer-events: none;
            opacity: 0;
            z-index: 10;
        }

        /* Footer */
        .footer {
            margin-top: 2rem;
            padding-top: 1rem;
            border-top: 1px solid var(--border);
            color: var(--dim);
            font-size: 0.875rem;
            text-align: center;
        }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <div>
                <div class="logo">Streamlens</div>
                <div class="subtitle">Streaming Catalog Dashboard</div>
            </div>
            <div class="filter" id="type-filter">
                <span class="filter-label">Content Type</span>
            </div>
        </div>

        <div class="stats">
            <div class="stat titles">
                <div class="stat-value" id="stat-total">0</div>
                <div class="stat-label">Titles</div>
            </div>
            <div class="stat">
                <div class="stat-value" id="stat-types">0</div>
                <div class="stat-label">Types Selected</div>
            </div>
            <div class="stat">
                <div class="stat-value" id="stat-span">&ndash;</div>
                <div class="stat-label">Added Between</div>
            </div>
            <div class="stat dropped">
                <div class="stat-value" id="stat-dropped">0</div>
                <div class="stat-label">Rows Dropped at Load</div>
            </div>
        </div>

        <div class="charts">
            <div class="chart-card">
                <div class="chart-title">Content Type Distribution</div>
                <div id="type-chart"></div>
            </div>
            <div class="chart-card">
                <div class="chart-title">Content Added Per Year</div>
                <div id="yearly-chart"></div>
            </div>
            <div class="chart-card">
                <div class="chart-title">Top 10 Countries</div>
                <div id="countries-chart"></div>
            </div>
            <div class="chart-card">
                <div class="chart-title">Most Popular Genres</div>
                <div id="genres-chart"></div>
            </div>
            <div class="chart-card">
                <div class="chart-title">Rating Distribution</div>
                <div id="ratings-chart"></div>
            </div>
            <div class="chart-card">
                <div class="chart-title">Titles Added by Calendar Month</div>
                <div id="months-chart"></div>
            </div>
            <div class="chart-card">
                <div class="chart-title">Genre Clusters (TF-IDF + k-means)</div>
                <div id="clusters-chart"></div>
                <div class="cluster-terms" id="cluster-terms"></div>
            </div>
            <div class="chart-card">
                <div class="chart-title">Description Sentiment Distribution</div>
                <div id="sentiment-chart"></div>
            </div>
            <div class="chart-card">
                <div class="chart-title">Average Sentiment by Rating</div>
                <div id="sentiment-rating-chart"></div>
            </div>
            <div class="chart-card">
                <div class="chart-title">Top 10 Most Featured Actors</div>
                <div id="actors-chart"></div>
            </div>
            <div class="chart-card wide">
                <div class="chart-title">Titles Added Over Time</div>
                <div id="series-chart"></div>
            </div>
        </div>

        <div class="footer">
            Generated <span id="generated"></span> from <span id="source"></span>
        </div>
    </div>

    <div class="tooltip" id="tooltip"></div>

    <script>
    let data = /*__DATA__*/null;
    const interactive = __INTERACTIVE__;

    const tooltip = d3.select('#tooltip');
    function showTooltip(event, text) {
        tooltip.style('opacity', 1)
            .html(text)
            .style('left', (event.pageX + 12) + 'px')
            .style('top', (event.pageY - 12) + 'px');
    }
    function hideTooltip() { tooltip.style('opacity', 0); }

    function clear(id) { d3.select('#' + id).selectAll('*').remove(); }

    function frame(id, heightPx) {
        const container = document.getElementById(id);
        const margin = { top: 10, right: 20, bottom: 70, left: 50 };
        const width = Math.max(container.clientWidth - margin.left - margin.right, 100);
        const height = heightPx - margin.top - margin.bottom;
        const svg = d3.select('#' + id)
            .append('svg')
            .attr('width', width + margin.left + margin.right)
            .attr('height', height + margin.top + margin.bottom)
            .append('g')
            .attr('transform', `translate(${margin.left},${margin.top})`);
        return { svg, width, height };
    }

    // Vertical bars over {label, count} entries.
    function barChart(id, entries, color) {
        clear(id);
        const { svg, width, height } = frame(id, 280);
        const x = d3.scaleBand().domain(entries.map(d => d.label)).range([0, width]).padding(0.2);
        const y = d3.scaleLinear().domain([0, d3.max(entries, d => d.count) || 1]).nice().range([height, 0]);

        svg.append('g').attr('transform', `translate(0,${height})`)
            .call(d3.axisBottom(x))
            .selectAll('text')
            .attr('transform', 'rotate(-40)')
            .style('text-anchor', 'end');
        svg.append('g').call(d3.axisLeft(y).ticks(5));

        svg.selectAll('rect').data(entries).enter().append('rect')
            .attr('x', d => x(d.label))
            .attr('y', d => y(d.count))
            .attr('width', x.bandwidth())
            .attr('height', d => height - y(d.count))
            .attr('fill', color)
            .attr('rx', 3)
            .on('mouseover', (event, d) => showTooltip(event, `${d.label}: ${d.count}`))
            .on('mouseout', hideTooltip);
    }

    // Horizontal bars for top-N leaderboards with long labels.
    function hbarChart(id, entries, color) {
        clear(id);
        const container = document.getElementById(id);
        const margin = { top: 10, right: 20, bottom: 30, left: 150 };
        const width = Math.max(container.clientWidth - margin.left - margin.right, 100);
        const height = Math.max(entries.length * 26, 40);
        const svg = d3.select('#' + id).append('svg')
            .attr('width', width + margin.left + margin.right)
            .attr('height', height + margin.top + margin.bottom)
            .append('g')
            .attr('transform', `translate(${margin.left},${margin.top})`);

        const y = d3.scaleBand().domain(entries.map(d => d.label)).range([0, height]).padding(0.25);
        const x = d3.scaleLinear().domain([0, d3.max(entries, d => d.count) || 1]).nice().range([0, width]);

        svg.append('g').call(d3.axisLeft(y));
        svg.append('g').attr('transform', `translate(0,${height})`).call(d3.axisBottom(x).ticks(5));

        svg.selectAll('rect').data(entries).enter().append('rect')
            .attr('x', 0)
            .attr('y', d => y(d.label))
            .attr('width', d => x(d.count))
            .attr('height', y.bandwidth())
            .attr('fill', color)
            .attr('rx', 3)
            .on('mouseover', (event, d) => showTooltip(event, `${d.label}: ${d.count}`))
            .on('mouseout', hideTooltip);
    }

    // Line over ordered {label, count} entries.
    function lineChart(id, entries, color) {
        clear(id);
        const { svg, width, height } = frame(id, 280);
        const x = d3.scalePoint().domain(entries.map(d => d.label)).range([0, width]);
        const y = d3.scaleLinear().domain([0, d3.max(entries, d => d.count) || 1]).nice().range([height, 0]);

        const everyNth = Math.ceil(entries.length / 16);
        svg.append('g').attr('transform', `translate(0,${height})`)
            .call(d3.axisBottom(x).tickValues(x.domain().filter((_, i) => i % everyNth === 0)))
            .selectAll('text')
            .attr('transform', 'rotate(-40)')
            .style('text-anchor', 'end');
        svg.append('g').call(d3.axisLeft(y).ticks(5));

        svg.append('path').datum(entries)
            .attr('fill', 'none')
            .attr('stroke', color)
            .attr('stroke-width', 2)
            .attr('d', d3.line().x(d => x(d.label)).y(d => y(d.count)));

        svg.selectAll('circle').data(entries).enter().append('circle')
            .attr('cx', d => x(d.label))
            .attr('cy', d => y(d.count))
            .attr('r', 3)
            .attr('fill', color)
            .on('mouseover', (event, d) => showTooltip(event, `${d.label}: ${d.count}`))
            .on('mouseout', hideTooltip);
    }

    // Bars that may dip below zero (mean sentiment per rating).
    function signedBarChart(id, entries) {
        clear(id);
        const { svg, width, height } = frame(id, 280);
        const extent = d3.max(entries, d => Math.abs(d.mean)) || 0.1;
        const x = d3.scaleBand().domain(entries.map(d => d.label)).range([0, width]).padding(0.2);
        const y = d3.scaleLinear().domain([-extent, extent]).nice().range([height, 0]);

        svg.append('g').attr('transform', `translate(0,${y(0)})`)
            .call(d3.axisBottom(x).tickSize(0))
            .selectAll('text')
            .attr('transform', 'rotate(-40)')
            .style('text-anchor', 'end');
        svg.append('g').call(d3.axisLeft(y).ticks(5));

        svg.selectAll('rect').data(entries).enter().append('rect')
            .attr('x', d => x(d.label))
            .attr('y', d => d.mean >= 0 ? y(d.mean) : y(0))
            .attr('width', x.bandwidth())
            .attr('height', d => Math.abs(y(d.mean) - y(0)))
            .attr('fill', d => d.mean >= 0 ? 'var(--movie)' : 'var(--neg)')
            .attr('rx', 3)
            .on('mouseover', (event, d) => showTooltip(event, `${d.label}: ${d.mean.toFixed(3)}`))
            .on('mouseout', hideTooltip);
    }

    function histogramChart(id, hist) {
        const width = (hist.hi - hist.lo) / hist.counts.length;
        const entries = hist.counts.map((count, i) => ({
            label: (hist.lo + width * (i + 0.5)).toFixed(2),
            count
        }));
        barChart(id, entries, 'var(--accent)');
    }

    function drawFilter() {
        const filter = d3.select('#type-filter');
        filter.selectAll('label').remove();
        data.available_types.forEach(t => {
            const label = filter.append('label');
            label.append('input')
                .attr('type', 'checkbox')
                .attr('value', t)
                .property('checked', data.selected_types.includes(t))
                .property('disabled', !interactive)
                .on('change', refetch);
            label.append('span').text(t);
        });
    }

    function refetch() {
        const checked = Array.from(document.querySelectorAll('#type-filter input:checked'))
            .map(el => el.value);
        // Empty selection is legal: every chart reads zero.
        const params = new URLSearchParams({ types: checked.join(',') });
        fetch('/api/dashboard?' + params.toString())
            .then(r => r.json())
            .then(body => {
                if (body.ok) { data = body.data; drawAll(); }
            });
    }

    function drawAll() {
        document.getElementById('stat-total').textContent = data.total_titles;
        document.getElementById('stat-types').textContent = data.selected_types.length;
        document.getElementById('stat-span').textContent =
            data.first_added ? `${data.first_added} / ${data.last_added}` : '–';
        document.getElementById('stat-dropped').textContent = data.dropped_rows;
        document.getElementById('generated').textContent = data.generated;
        document.getElementById('source').textContent = data.source;

        drawFilter();
        barChart('type-chart', data.type_counts, 'var(--movie)');
        lineChart('yearly-chart', data.yearly_counts, 'var(--accent)');
        hbarChart('countries-chart', data.top_countries, 'var(--accent)');
        hbarChart('genres-chart', data.top_genres, 'var(--show)');
        barChart('ratings-chart', data.rating_counts, 'var(--warn)');
        barChart('months-chart', data.month_counts, 'var(--accent)');
        barChart('clusters-chart',
            data.genre_clusters.counts.map((count, i) => ({ label: 'Cluster ' + i, count })),
            'var(--show)');
        document.getElementById('cluster-terms').textContent =
            data.genre_clusters.top_terms
                .map((terms, i) => terms.length ? `${i}: ${terms.join(', ')}` : null)
                .filter(Boolean)
                .join('  •  ');
        histogramChart('sentiment-chart', data.sentiment_histogram);
        signedBarChart('sentiment-rating-chart', data.sentiment_by_rating);
        hbarChart('actors-chart', data.top_actors, 'var(--movie)');
        lineChart('series-chart', data.monthly_series, 'var(--accent)');
    }

    drawAll();
    </script>
</body>
</html>
"#;
